use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::ConfigError;

/// Tunables of the flight controller.
///
/// Defaults carry the values the airframe was tuned with. Lengths are in
/// world units (centimetres for the reference airframe) and rates named
/// `*_rate` in the lag filters are fractions per `thrust.reference_dt`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub thrust: ThrustConfig,
    pub lift: LiftConfig,
    pub stabilization: StabilizationConfig,
    pub authority: AuthorityConfig,
    pub damping: DampingConfig,
    pub normalizer: NormalizerConfig,
    pub gear: GearConfig,
    pub braking: BrakingConfig,
    pub sensor: SensorConfig,
    pub body: BodyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrustConfig {
    /// Upper bound of forward force, reached at full throttle.
    pub max_speed: f64,
    /// Multiplier from forward force to the force pushed to the rigid body.
    pub thrust_scale: f64,
    /// Lag rate while forward force is below its target.
    pub rise_rate: f64,
    /// Lag rate while forward force is above its target.
    pub decay_rate: f64,
    /// Step length the lag rates are expressed against (s).
    pub reference_dt: f64,
}

impl Default for ThrustConfig {
    fn default() -> Self {
        Self {
            max_speed: 4000.0,
            thrust_scale: 800_000.0,
            rise_rate: 1.0,
            decay_rate: 0.05,
            reference_dt: 1.0 / 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    pub coefficient: f64,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            coefficient: 4000.0,
        }
    }
}

/// Pitch-down torque that makes the airframe fight for altitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizationConfig {
    /// Below this pitch (deg) the airframe is considered in a dive and left alone.
    pub min_pitch_deg: f64,
    pub min_force: f64,
    pub min_height: f64,
    pub intensity: f64,
    pub force_divisor: f64,
    pub min_torque: f64,
    pub max_torque: f64,
    /// Height reported while resting on the gear.
    pub ground_offset: f64,
    /// Height band above `ground_offset` over which the torque fades out.
    pub cruise_altitude_span: f64,
}

impl Default for StabilizationConfig {
    fn default() -> Self {
        Self {
            min_pitch_deg: -80.0,
            min_force: 100.0,
            min_height: 15.0,
            intensity: 345.0,
            force_divisor: 10.0,
            min_torque: 100.0,
            max_torque: 150.0,
            ground_offset: 13.0,
            cruise_altitude_span: 79_920.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorityConfig {
    /// Authority at half of `max_speed`.
    pub peak: f64,
    /// Authority left at `max_speed`.
    pub at_max_speed: f64,
    pub rudder_ground_multiplier: f64,
    /// Yaw per unit of throttle asymmetry is `1 / throttle_yaw_divisor`.
    pub throttle_yaw_divisor: f64,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            peak: 180.0,
            at_max_speed: 20.0,
            rudder_ground_multiplier: 2.0,
            throttle_yaw_divisor: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DampingConfig {
    /// Fraction of torque magnitude removed per reference step.
    pub rate: f64,
    /// Largest reduction per reference step.
    pub strength: f64,
    /// Ceiling on torque magnitude.
    pub max_torque: f64,
    /// Torque below this magnitude is zeroed.
    pub epsilon: f64,
}

impl Default for DampingConfig {
    fn default() -> Self {
        Self {
            rate: 0.1,
            strength: 200.0,
            max_torque: 1800.0,
            epsilon: 1e-3,
        }
    }
}

/// Response of one input axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFilterConfig {
    /// Fraction of the gap to the raw sample closed per event.
    pub blend: f64,
    /// Raw samples smaller than this snap the axis to zero.
    pub deadband: f64,
    /// Raw samples beyond this with the opposite sign snap the axis to zero.
    pub reversal: Option<f64>,
}

impl AxisFilterConfig {
    pub const fn new(blend: f64, deadband: f64, reversal: Option<f64>) -> Self {
        Self {
            blend,
            deadband,
            reversal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub stick: AxisFilterConfig,
    pub rudder: AxisFilterConfig,
    pub throttle: AxisFilterConfig,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            stick: AxisFilterConfig::new(0.1, 0.08, Some(0.6)),
            rudder: AxisFilterConfig::new(0.01, 0.09, Some(0.6)),
            throttle: AxisFilterConfig::new(0.1, 0.08, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearConfig {
    /// Gear offset from the airframe origin when extended.
    pub extended: Vector3<f64>,
    /// Gear offset from the airframe origin when retracted.
    pub retracted: Vector3<f64>,
    /// Interpolation speed (1/s); the time constant is `1 / rate`.
    pub rate: f64,
    /// Distance under which the gear counts as settled.
    pub settle_epsilon: f64,
    /// Forward force removed per tick while the gear creates drag.
    pub drag_penalty: f64,
    /// Extended gear below this height creates drag.
    pub drag_height: f64,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            extended: Vector3::new(25.0, 15.0, -50.0),
            retracted: Vector3::new(25.0, 15.0, 0.0),
            rate: 2.0,
            settle_epsilon: 0.01,
            drag_penalty: 1.0,
            drag_height: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrakingConfig {
    pub toe_brake_coefficient: f64,
    pub spoiler_coefficient: f64,
}

impl Default for BrakingConfig {
    fn default() -> Self {
        Self {
            toe_brake_coefficient: 5.0,
            spoiler_coefficient: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    pub ray_length: f64,
    /// Height at or below which the airframe counts as on the ground.
    pub ground_threshold: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            ray_length: 1_000_000.0,
            ground_threshold: 20.0,
        }
    }
}

/// Damping pushed to the rigid body when the controller attaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub linear_damping: f64,
    pub angular_damping: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            linear_damping: 5.0,
            angular_damping: 10.0,
        }
    }
}

impl FlightConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks every constant the tick divides by or clamps with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thrust = &self.thrust;
        check_positive("thrust.max_speed", thrust.max_speed)?;
        check_rate("thrust.rise_rate", thrust.rise_rate)?;
        check_rate("thrust.decay_rate", thrust.decay_rate)?;
        check_positive("thrust.reference_dt", thrust.reference_dt)?;
        check_non_negative("thrust.thrust_scale", thrust.thrust_scale)?;
        check_non_negative("lift.coefficient", self.lift.coefficient)?;

        let stab = &self.stabilization;
        for (name, value) in [
            ("stabilization.min_pitch_deg", stab.min_pitch_deg),
            ("stabilization.min_force", stab.min_force),
            ("stabilization.min_height", stab.min_height),
            ("stabilization.intensity", stab.intensity),
            ("stabilization.force_divisor", stab.force_divisor),
            ("stabilization.min_torque", stab.min_torque),
            ("stabilization.max_torque", stab.max_torque),
            ("stabilization.ground_offset", stab.ground_offset),
            ("stabilization.cruise_altitude_span", stab.cruise_altitude_span),
        ] {
            check_finite(name, value)?;
        }
        if stab.cruise_altitude_span == 0.0 {
            return Err(ConfigError::invalid(
                "stabilization.cruise_altitude_span",
                stab.cruise_altitude_span,
            ));
        }
        if stab.force_divisor == 0.0 {
            return Err(ConfigError::invalid(
                "stabilization.force_divisor",
                stab.force_divisor,
            ));
        }
        if stab.min_torque > stab.max_torque {
            return Err(ConfigError::ValidationError(format!(
                "stabilization.min_torque ({}) exceeds stabilization.max_torque ({})",
                stab.min_torque, stab.max_torque
            )));
        }

        let authority = &self.authority;
        check_non_negative("authority.peak", authority.peak)?;
        check_non_negative("authority.at_max_speed", authority.at_max_speed)?;
        check_non_negative(
            "authority.rudder_ground_multiplier",
            authority.rudder_ground_multiplier,
        )?;
        check_positive(
            "authority.throttle_yaw_divisor",
            authority.throttle_yaw_divisor,
        )?;

        let damping = &self.damping;
        check_rate("damping.rate", damping.rate)?;
        check_non_negative("damping.strength", damping.strength)?;
        check_positive("damping.max_torque", damping.max_torque)?;
        check_non_negative("damping.epsilon", damping.epsilon)?;

        for (name, axis) in [
            ("normalizer.stick", &self.normalizer.stick),
            ("normalizer.rudder", &self.normalizer.rudder),
            ("normalizer.throttle", &self.normalizer.throttle),
        ] {
            check_rate(&format!("{name}.blend"), axis.blend)?;
            check_non_negative(&format!("{name}.deadband"), axis.deadband)?;
            if let Some(reversal) = axis.reversal {
                check_finite(&format!("{name}.reversal"), reversal)?;
                if reversal < axis.deadband {
                    return Err(ConfigError::ValidationError(format!(
                        "{name}.reversal ({reversal}) is inside the deadband ({})",
                        axis.deadband
                    )));
                }
            }
        }

        check_positive("gear.rate", self.gear.rate)?;
        check_non_negative("gear.settle_epsilon", self.gear.settle_epsilon)?;
        check_non_negative("gear.drag_penalty", self.gear.drag_penalty)?;
        check_non_negative(
            "braking.toe_brake_coefficient",
            self.braking.toe_brake_coefficient,
        )?;
        check_non_negative(
            "braking.spoiler_coefficient",
            self.braking.spoiler_coefficient,
        )?;
        check_non_negative("gear.drag_height", self.gear.drag_height)?;
        for (name, offset) in [
            ("gear.extended", &self.gear.extended),
            ("gear.retracted", &self.gear.retracted),
        ] {
            if !offset.iter().all(|v| v.is_finite()) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite, got {offset:?}"
                )));
            }
        }
        check_positive("sensor.ray_length", self.sensor.ray_length)?;
        check_finite("sensor.ground_threshold", self.sensor.ground_threshold)?;
        check_non_negative("body.linear_damping", self.body.linear_damping)?;
        check_non_negative("body.angular_damping", self.body.angular_damping)?;

        Ok(())
    }
}

fn check_rate(name: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}
