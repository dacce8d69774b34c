use jetsim::{components::SpatialComponent, FlightConfig, PhysicsConfig};
use nalgebra::Vector3;

/// Default flight tuning, validated.
pub fn create_test_flight_config() -> FlightConfig {
    let config = FlightConfig::default();
    config.validate().expect("default flight config is valid");
    config
}

/// Reference integrator settings with a custom fixed step.
pub fn create_test_physics_config(timestep: f64) -> PhysicsConfig {
    PhysicsConfig {
        timestep,
        ..Default::default()
    }
}

/// Sitting on the gear at the runway threshold.
pub fn create_runway_start() -> SpatialComponent {
    SpatialComponent::at_position(Vector3::new(0.0, 0.0, 13.0))
}

/// Level flight well above the stabilization floor.
pub fn create_cruise_start() -> SpatialComponent {
    SpatialComponent::at_position_and_speed(Vector3::new(0.0, 0.0, 5000.0), 1000.0, 0.0)
}
