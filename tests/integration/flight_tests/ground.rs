use approx::assert_relative_eq;
use jetsim::{components::SpatialComponent, resources::NoGround};
use nalgebra::Vector3;

use crate::common::{create_test_height_map, TestAppBuilder};

#[test]
fn test_missed_raycast_keeps_last_height() {
    let mut app = TestAppBuilder::new()
        .with_start(SpatialComponent::at_position(Vector3::new(0.0, 0.0, 800.0)))
        .build();
    app.step();
    let sensed = app.telemetry().height_above_ground;
    assert!(sensed > 790.0);

    app.insert_ground(NoGround);
    app.spatial_mut().position.z = 50_000.0;
    app.step();

    let telemetry = app.telemetry();
    assert!(!telemetry.ground_hit);
    assert_relative_eq!(telemetry.height_above_ground, sensed);
}

#[test]
fn test_height_follows_terrain() {
    let mut app = TestAppBuilder::new()
        .with_ground(create_test_height_map())
        .with_start(SpatialComponent::at_position(Vector3::new(500.0, 500.0, 1000.0)))
        .build();
    app.step();

    let telemetry = app.telemetry();
    assert!(telemetry.ground_hit);
    // Terrain at x = 500 sits at 50
    assert_relative_eq!(telemetry.height_above_ground, 950.0, epsilon = 1e-9);
}

#[test]
fn test_leaving_height_map_holds_height() {
    let mut app = TestAppBuilder::new()
        .with_ground(create_test_height_map())
        .with_start(SpatialComponent::at_position(Vector3::new(500.0, 500.0, 1000.0)))
        .build();
    app.step();

    app.spatial_mut().position.x = 5000.0;
    app.step();

    let telemetry = app.telemetry();
    assert!(!telemetry.ground_hit);
    assert_relative_eq!(telemetry.height_above_ground, 950.0, epsilon = 1e-9);
}
