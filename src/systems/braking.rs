use crate::{
    components::{controls::clamp_unit, FlightState},
    resources::BrakingConfig,
};

/// Wheel brakes. Only positive deflection counts and only with the wheels
/// near the ground. Returns the force removed.
pub fn apply_toe_brakes(
    state: &mut FlightState,
    left: f64,
    right: f64,
    config: &BrakingConfig,
    ground_threshold: f64,
) -> f64 {
    if !state.is_near_ground(ground_threshold) {
        return 0.0;
    }
    let demand = left.clamp(0.0, 1.0) + right.clamp(0.0, 1.0);
    state.reduce_force(demand * config.toe_brake_coefficient)
}

/// Airbrake. Works at any height.
pub fn apply_spoiler(state: &mut FlightState, value: f64, config: &BrakingConfig) -> f64 {
    state.reduce_force(clamp_unit(value) * config.spoiler_coefficient)
}
