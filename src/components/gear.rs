use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{components::GearSwitch, resources::GearConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GearState {
    #[default]
    Extended,
    Retracted,
}

impl From<GearSwitch> for GearState {
    fn from(switch: GearSwitch) -> Self {
        match switch {
            GearSwitch::Down => GearState::Extended,
            GearSwitch::Up => GearState::Retracted,
        }
    }
}

/// Landing-gear actuator state: the commanded state and where the gear
/// currently is on its way there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingGear {
    pub state: GearState,
    /// Current offset from the airframe origin.
    pub position: Vector3<f64>,
    /// Offset the gear is moving toward.
    pub target: Vector3<f64>,
}

impl LandingGear {
    /// Gear down and locked, as on the ramp.
    pub fn extended(config: &GearConfig) -> Self {
        Self {
            state: GearState::Extended,
            position: config.extended,
            target: config.extended,
        }
    }

    pub fn target_for(state: GearState, config: &GearConfig) -> Vector3<f64> {
        match state {
            GearState::Extended => config.extended,
            GearState::Retracted => config.retracted,
        }
    }

    pub fn is_moving(&self, settle_epsilon: f64) -> bool {
        (self.target - self.position).norm() > settle_epsilon
    }
}
