use bevy::prelude::*;

use crate::{
    components::{FlightState, GearState, GearSwitch, LandingGear},
    resources::GearConfig,
    utils::interp_vector_to,
};

/// Applies a lever position. Returns true when the commanded state changed.
pub fn switch_gear(gear: &mut LandingGear, switch: GearSwitch, config: &GearConfig) -> bool {
    let state = GearState::from(switch);
    if gear.state == state {
        return false;
    }

    gear.state = state;
    gear.target = LandingGear::target_for(state, config);
    info!("Landing gear {:?}", state);
    true
}

/// Moves the gear toward its target and returns the drag penalty removed
/// from forward force this tick.
///
/// Drag applies while retracting, and while extended close to the ground.
pub fn update_gear(state: &mut FlightState, dt: f64, config: &GearConfig) -> f64 {
    let moving = state.gear.is_moving(config.settle_epsilon);
    if moving {
        state.gear.position =
            interp_vector_to(&state.gear.position, &state.gear.target, dt, config.rate);
        if !state.gear.is_moving(config.settle_epsilon) {
            state.gear.position = state.gear.target;
        }
    }

    let dragging = match state.gear.state {
        GearState::Retracted => moving,
        GearState::Extended => state.height_above_ground < config.drag_height,
    };
    if dragging {
        state.reduce_force(config.drag_penalty)
    } else {
        0.0
    }
}
