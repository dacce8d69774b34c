use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    components::{GearState, LandingGear},
    resources::GearConfig,
};

/// Persistent dynamic state of one airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Engine force in `[0, max_speed]`.
    pub forward_force: f64,
    /// Commanded torque as (pitch, roll, yaw).
    pub torque: Vector3<f64>,
    /// Last successful ground distance; kept through raycast misses.
    pub height_above_ground: f64,
    /// Whether any raycast has hit since spawn.
    pub ground_acquired: bool,
    pub gear: LandingGear,
}

impl FlightState {
    /// Spawn state: no force, no torque, height zero, gear extended.
    pub fn new(gear: &GearConfig) -> Self {
        Self {
            forward_force: 0.0,
            torque: Vector3::zeros(),
            height_above_ground: 0.0,
            ground_acquired: false,
            gear: LandingGear::extended(gear),
        }
    }

    pub fn reset(&mut self, gear: &GearConfig) {
        *self = Self::new(gear);
    }

    pub fn clamp_force(&mut self, max_speed: f64) {
        self.forward_force = self.forward_force.clamp(0.0, max_speed);
    }

    /// Removes `amount` of forward force without letting it go negative and
    /// returns how much was actually removed.
    pub fn reduce_force(&mut self, amount: f64) -> f64 {
        let before = self.forward_force;
        self.forward_force = (self.forward_force - amount.max(0.0)).max(0.0);
        before - self.forward_force
    }

    pub fn is_near_ground(&self, threshold: f64) -> bool {
        self.height_above_ground <= threshold
    }
}

/// What one tick did, for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub forward_force: f64,
    pub target_force: f64,
    pub height_above_ground: f64,
    /// Whether this tick's raycast hit.
    pub ground_hit: bool,
    pub lift: f64,
    /// Pitch-down stabilization magnitude, zero when inactive.
    pub stabilization_torque: f64,
    pub commanded_torque: Vector3<f64>,
    pub gear_state: GearState,
    pub gear_drag: f64,
}
