use approx::assert_relative_eq;
use jetsim::{
    components::{PhysicsComponent, SpatialComponent},
    FlightConfig, FlightTelemetry,
};
use nalgebra::Vector3;

/// Assert that two positions are equal within epsilon
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        spatial.angular_velocity
    );
    assert_relative_eq!(spatial.attitude.norm(), 1.0, epsilon = 1e-6);
}

/// Assert that a physics component's state is valid
#[track_caller]
pub fn assert_physics_valid(physics: &PhysicsComponent) {
    assert!(physics.mass > 0.0, "Mass must be positive");
    assert!(physics.mass.is_finite(), "Mass must be finite");
    assert!(
        physics.net_force.iter().all(|x| x.is_finite()),
        "Net force contains non-finite values"
    );
    assert!(
        physics.net_torque.iter().all(|x| x.is_finite()),
        "Net torque contains non-finite values"
    );
}

/// Assert that a tick stayed inside its documented bounds
#[track_caller]
pub fn assert_telemetry_valid(telemetry: &FlightTelemetry, config: &FlightConfig) {
    assert!(telemetry.forward_force >= 0.0, "Force went negative");
    assert!(
        telemetry.forward_force <= config.thrust.max_speed,
        "Force {} exceeds max speed",
        telemetry.forward_force
    );
    assert!(telemetry.lift >= 0.0, "Lift went negative");
    assert!(
        telemetry.commanded_torque.norm() <= config.damping.max_torque + 1e-9,
        "Commanded torque exceeds clamp"
    );
    if telemetry.stabilization_torque > 0.0 {
        assert!(telemetry.stabilization_torque >= config.stabilization.min_torque - 1e-9);
        assert!(telemetry.stabilization_torque <= config.stabilization.max_torque + 1e-9);
    }
}
