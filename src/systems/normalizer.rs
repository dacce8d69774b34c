//! Smoothing of raw pilot inputs.
//!
//! Every event moves an axis a fixed fraction of the way toward the raw
//! sample. Two cases bypass the blend and put the axis at exactly zero: a
//! sample inside the deadband, and a hard deflection against the current
//! sign (the pilot reversing the control), which would otherwise overshoot.

use serde::{Deserialize, Serialize};

use crate::{
    components::{controls::clamp_axis, NormalizedControl},
    resources::{AxisFilterConfig, NormalizerConfig},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFilter {
    config: AxisFilterConfig,
    value: f64,
}

impl AxisFilter {
    pub fn new(config: AxisFilterConfig) -> Self {
        Self { config, value: 0.0 }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn update(&mut self, raw: f64) -> f64 {
        let magnitude = raw.abs();
        let reversed = self.config.reversal.is_some_and(|threshold| {
            magnitude > threshold && self.value != 0.0 && raw.signum() != self.value.signum()
        });

        if magnitude < self.config.deadband || reversed {
            self.value = 0.0;
        } else {
            self.value += (raw - self.value) * self.config.blend;
        }
        self.value
    }
}

/// Owns the filtered view of every continuous pilot input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlNormalizer {
    pitch: AxisFilter,
    roll: AxisFilter,
    yaw: AxisFilter,
    throttle: AxisFilter,
    asymmetry: AxisFilter,
}

impl ControlNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            pitch: AxisFilter::new(config.stick),
            roll: AxisFilter::new(config.stick),
            yaw: AxisFilter::new(config.rudder),
            throttle: AxisFilter::new(config.throttle),
            asymmetry: AxisFilter::new(AxisFilterConfig {
                reversal: None,
                ..config.throttle
            }),
        }
    }

    pub fn reset(&mut self) {
        self.pitch.reset();
        self.roll.reset();
        self.yaw.reset();
        self.throttle.reset();
        self.asymmetry.reset();
    }

    pub fn on_stick(&mut self, pitch: f64, roll: f64) {
        self.pitch.update(clamp_axis(pitch));
        self.roll.update(clamp_axis(roll));
    }

    pub fn release_stick(&mut self) {
        self.pitch.update(0.0);
        self.roll.update(0.0);
    }

    pub fn on_rudder(&mut self, value: f64) {
        self.yaw.update(clamp_axis(value));
    }

    /// Levers at -1 are idle; both at +1 is a throttle position of 2.
    pub fn on_throttle(&mut self, left: f64, right: f64) {
        let left = clamp_axis(left);
        let right = clamp_axis(right);
        self.throttle.update((left + right) / 2.0 + 1.0);
        self.asymmetry.update(left - right);
    }

    pub fn normalized(&self) -> NormalizedControl {
        NormalizedControl {
            pitch: self.pitch.value(),
            roll: self.roll.value(),
            yaw: self.yaw.value(),
            throttle_position: self.throttle.value().clamp(0.0, 2.0),
            throttle_asymmetry: self.asymmetry.value(),
        }
    }
}
