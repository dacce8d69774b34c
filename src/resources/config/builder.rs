use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{resources::FlightConfig, utils::ConfigError};

/// Overrides on top of [`FlightConfig::default`] for the most commonly tuned
/// values, readable from a flat JSON object.
#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct FlightConfigBuilder {
    pub max_speed: Option<f64>,
    pub thrust_scale: Option<f64>,
    pub lift_coefficient: Option<f64>,
    pub peak_authority: Option<f64>,
    pub ground_threshold: Option<f64>,
    pub toe_brake_coefficient: Option<f64>,
    pub spoiler_coefficient: Option<f64>,
    pub gear_rate: Option<f64>,
}

impl FlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    pub fn thrust_scale(mut self, scale: f64) -> Self {
        self.thrust_scale = Some(scale);
        self
    }

    pub fn lift_coefficient(mut self, coefficient: f64) -> Self {
        self.lift_coefficient = Some(coefficient);
        self
    }

    pub fn peak_authority(mut self, peak: f64) -> Self {
        self.peak_authority = Some(peak);
        self
    }

    pub fn ground_threshold(mut self, threshold: f64) -> Self {
        self.ground_threshold = Some(threshold);
        self
    }

    pub fn toe_brake_coefficient(mut self, coefficient: f64) -> Self {
        self.toe_brake_coefficient = Some(coefficient);
        self
    }

    pub fn spoiler_coefficient(mut self, coefficient: f64) -> Self {
        self.spoiler_coefficient = Some(coefficient);
        self
    }

    pub fn gear_rate(mut self, rate: f64) -> Self {
        self.gear_rate = Some(rate);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::ValidationError(format!(
                "expected a JSON object, got {value}"
            )));
        }

        let read = |key: &str| -> Result<Option<f64>, ConfigError> {
            match value.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(v) => v.as_f64().map(Some).ok_or_else(|| {
                    ConfigError::InvalidParameter {
                        name: key.to_string(),
                        value: v.to_string(),
                    }
                }),
            }
        };

        Ok(Self {
            max_speed: read("max_speed")?,
            thrust_scale: read("thrust_scale")?,
            lift_coefficient: read("lift_coefficient")?,
            peak_authority: read("peak_authority")?,
            ground_threshold: read("ground_threshold")?,
            toe_brake_coefficient: read("toe_brake_coefficient")?,
            spoiler_coefficient: read("spoiler_coefficient")?,
            gear_rate: read("gear_rate")?,
        })
    }

    pub fn build(self) -> Result<FlightConfig, ConfigError> {
        let mut config = FlightConfig::default();

        if let Some(max_speed) = self.max_speed {
            config.thrust.max_speed = max_speed;
        }
        if let Some(scale) = self.thrust_scale {
            config.thrust.thrust_scale = scale;
        }
        if let Some(coefficient) = self.lift_coefficient {
            config.lift.coefficient = coefficient;
        }
        if let Some(peak) = self.peak_authority {
            config.authority.peak = peak;
        }
        if let Some(threshold) = self.ground_threshold {
            config.sensor.ground_threshold = threshold;
        }
        if let Some(coefficient) = self.toe_brake_coefficient {
            config.braking.toe_brake_coefficient = coefficient;
        }
        if let Some(coefficient) = self.spoiler_coefficient {
            config.braking.spoiler_coefficient = coefficient;
        }
        if let Some(rate) = self.gear_rate {
            config.gear.rate = rate;
        }

        config.validate()?;
        Ok(config)
    }
}
