use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Frame-rate independent blend factor for a lag filter.
///
/// `rate` is the fraction of the remaining gap closed during one step of
/// `reference_dt` seconds. A step of `dt` seconds closes
/// `1 - (1 - rate)^(dt / reference_dt)` of the gap, so two half steps land
/// on the same value as one full step. A rate of 1 always closes the gap.
pub fn lag_alpha(rate: f64, dt: f64, reference_dt: f64) -> f64 {
    let rate = rate.clamp(0.0, 1.0);
    if rate >= 1.0 {
        return 1.0;
    }
    if dt <= 0.0 || reference_dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - rate).powf(dt / reference_dt)
}

/// Move `current` toward `target` by `dt * speed` of the remaining distance.
///
/// The step fraction is clamped to `[0, 1]` so the result never passes the
/// target.
pub fn interp_to(current: f64, target: f64, dt: f64, speed: f64) -> f64 {
    if speed <= 0.0 {
        return target;
    }
    let distance = target - current;
    if distance.abs() < 1e-8 {
        return target;
    }
    current + distance * (dt * speed).clamp(0.0, 1.0)
}

/// Per-axis [`interp_to`].
pub fn interp_vector_to(
    current: &Vector3<f64>,
    target: &Vector3<f64>,
    dt: f64,
    speed: f64,
) -> Vector3<f64> {
    Vector3::new(
        interp_to(current.x, target.x, dt, speed),
        interp_to(current.y, target.y, dt, speed),
        interp_to(current.z, target.z, dt, speed),
    )
}

/// Scale `v` down so its magnitude does not exceed `max`.
pub fn clamp_norm(v: Vector3<f64>, max: f64) -> Vector3<f64> {
    let norm = v.norm();
    if norm > max && norm > 0.0 {
        v * (max / norm)
    } else {
        v
    }
}

/// Body x axis (nose direction) in world frame.
#[inline]
pub fn forward_vector(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * Vector3::x()
}

/// Body z axis (canopy direction) in world frame.
#[inline]
pub fn up_vector(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * Vector3::z()
}

/// Nose elevation above the horizon in radians, positive nose-up.
pub fn pitch_angle(attitude: &UnitQuaternion<f64>) -> f64 {
    forward_vector(attitude).z.clamp(-1.0, 1.0).asin()
}
