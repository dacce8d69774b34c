//! Per-tick force and torque laws of the airframe.
//!
//! Nothing here models aerodynamics. Each law is a small tunable curve:
//! throttle to engine force through an asymmetric lag, lift proportional to
//! forward speed, a pitch-down torque the pilot has to hold off, and stick
//! authority that peaks at half of top speed.
//!
//! Commanded torque is kept as (pitch, roll, yaw). [`body_torque`] maps it to
//! body axes (x forward, y left, z up): nose-up pitch is a negative rotation
//! about y, right roll is positive about x and right yaw is negative about z.

use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    components::NormalizedControl,
    resources::{AuthorityConfig, DampingConfig, FlightConfig, StabilizationConfig, ThrustConfig},
    utils::{clamp_norm, forward_vector, lag_alpha, lerp, pitch_angle, rad_to_deg, up_vector},
};

/// Engine force requested by a throttle position in `[0, 2]`.
pub fn target_force(throttle_position: f64, max_speed: f64) -> f64 {
    throttle_position.clamp(0.0, 2.0) / 2.0 * max_speed
}

/// Moves `current` toward `target` with the rise rate when accelerating and
/// the decay rate when slowing down.
pub fn regulate_force(current: f64, target: f64, dt: f64, config: &ThrustConfig) -> f64 {
    let rate = if target < current {
        config.decay_rate
    } else {
        config.rise_rate
    };
    let alpha = lag_alpha(rate, dt, config.reference_dt);
    (current + (target - current) * alpha).clamp(0.0, config.max_speed)
}

/// World-frame thrust pushed to the rigid body.
pub fn thrust_force(
    attitude: &UnitQuaternion<f64>,
    forward_force: f64,
    config: &ThrustConfig,
) -> Vector3<f64> {
    forward_vector(attitude) * forward_force * config.thrust_scale
}

/// Lift along the body up axis, proportional to forward speed and never
/// negative.
pub fn lift_force(
    velocity: &Vector3<f64>,
    attitude: &UnitQuaternion<f64>,
    coefficient: f64,
) -> Vector3<f64> {
    let forward_speed = velocity.dot(&forward_vector(attitude));
    up_vector(attitude) * (forward_speed * coefficient).max(0.0)
}

/// One at the ground, falling to zero at the cruise altitude and growing
/// again above it.
pub fn altitude_factor(height: f64, config: &StabilizationConfig) -> f64 {
    (1.0 - (height - config.ground_offset) / config.cruise_altitude_span).abs()
}

/// World-frame pitch-down torque, or `None` while diving, slow or close to
/// the ground.
pub fn stabilization_torque(
    attitude: &UnitQuaternion<f64>,
    forward_force: f64,
    height: f64,
    config: &StabilizationConfig,
) -> Option<Vector3<f64>> {
    let pitch = rad_to_deg(pitch_angle(attitude));
    if pitch <= config.min_pitch_deg
        || forward_force <= config.min_force
        || height <= config.min_height
    {
        return None;
    }

    let magnitude = ((config.intensity - forward_force / config.force_divisor)
        * altitude_factor(height, config))
    .clamp(config.min_torque, config.max_torque);
    let direction = forward_vector(attitude)
        .cross(&-Vector3::z())
        .try_normalize(1e-9)?;

    Some(direction * magnitude)
}

/// How much torque full deflection produces at a given engine force.
///
/// Zero at rest, `peak` at half of `max_speed`, `at_max_speed` at the top,
/// linear in between.
pub fn torque_authority(forward_force: f64, max_speed: f64, config: &AuthorityConfig) -> f64 {
    let half = max_speed / 2.0;
    let force = forward_force.clamp(0.0, max_speed);
    if force <= half {
        lerp(0.0, config.peak, force / half)
    } else {
        lerp(config.peak, config.at_max_speed, (force - half) / half)
    }
}

/// Pilot torque as (pitch, roll, yaw) for this tick.
///
/// Rudder authority is multiplied near the ground, standing in for nosewheel
/// steering. Differential thrust yaws regardless of speed.
pub fn commanded_torque(
    control: &NormalizedControl,
    forward_force: f64,
    height: f64,
    config: &FlightConfig,
) -> Vector3<f64> {
    let authority = torque_authority(forward_force, config.thrust.max_speed, &config.authority);
    let rudder_authority = if height <= config.sensor.ground_threshold {
        authority * config.authority.rudder_ground_multiplier
    } else {
        authority
    };

    Vector3::new(
        control.pitch * authority,
        control.roll * authority,
        control.yaw * rudder_authority
            + control.throttle_asymmetry / config.authority.throttle_yaw_divisor,
    )
}

/// Pulls `torque` toward zero by `rate` of its magnitude per reference step,
/// never more than `strength` per reference step.
pub fn damp_torque(
    torque: &Vector3<f64>,
    frame_scale: f64,
    config: &DampingConfig,
) -> Vector3<f64> {
    let magnitude = torque.norm();
    if magnitude <= config.epsilon {
        return Vector3::zeros();
    }

    let reduction = (magnitude * config.rate * frame_scale)
        .min(config.strength * frame_scale)
        .min(magnitude);
    torque * ((magnitude - reduction) / magnitude)
}

/// Damps the held torque, folds in this tick's command and clamps the result.
pub fn update_torque(
    torque: &Vector3<f64>,
    commanded: &Vector3<f64>,
    dt: f64,
    config: &FlightConfig,
) -> Vector3<f64> {
    let frame_scale = (dt / config.thrust.reference_dt).max(0.0);
    let damped = damp_torque(torque, frame_scale, &config.damping);
    let next = clamp_norm(damped + commanded * frame_scale, config.damping.max_torque);
    if next.norm() <= config.damping.epsilon {
        Vector3::zeros()
    } else {
        next
    }
}

/// Maps (pitch, roll, yaw) onto body axes.
pub fn body_torque(torque: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(torque.y, -torque.x, -torque.z)
}
