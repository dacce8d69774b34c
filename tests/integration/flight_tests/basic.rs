use approx::assert_relative_eq;
use jetsim::{systems::dynamics::target_force, ControlEvent, GearState};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{
    assert_physics_valid, assert_spatial_valid, assert_telemetry_valid, create_cruise_start,
    create_runway_start, create_test_flight_config, create_test_physics_config, TestAppBuilder,
};

#[test]
fn test_spawn_state_is_zeroed() {
    let mut app = TestAppBuilder::new().build();

    let state = app.controller().state().clone();
    assert_eq!(state.forward_force, 0.0);
    assert_eq!(state.torque, Vector3::zeros());
    assert_eq!(state.height_above_ground, 0.0);
    assert_eq!(state.gear.state, GearState::Extended);
    assert_eq!(state.gear.position, create_test_flight_config().gear.extended);
}

#[test]
fn test_body_damping_set_on_first_step() {
    let mut app = TestAppBuilder::new().build();
    app.step();

    let physics = app.physics();
    assert_eq!(physics.linear_damping, 5.0);
    assert_eq!(physics.angular_damping, 10.0);
    assert_physics_valid(&physics);
}

#[test]
fn test_throttle_ten_ticks_tracks_target() {
    let config = create_test_flight_config();
    assert_eq!(config.thrust.rise_rate, 1.0);
    let mut app = TestAppBuilder::new()
        .with_physics(create_test_physics_config(0.016))
        .with_start(create_cruise_start())
        .build();

    let mut expected_position = 0.0;
    let mut previous = 0.0;
    for _ in 0..10 {
        app.send(ControlEvent::Throttle {
            left: 1.0,
            right: 1.0,
        });
        app.step();
        expected_position += (2.0 - expected_position) * config.normalizer.throttle.blend;

        let telemetry = app.telemetry();
        assert_telemetry_valid(&telemetry, &config);
        // A rise rate of 1 reaches the target within the tick
        assert_relative_eq!(telemetry.forward_force, telemetry.target_force, epsilon = 1e-9);
        assert!(telemetry.forward_force >= previous);
        previous = telemetry.forward_force;
    }

    assert_relative_eq!(
        app.controller().normalized().throttle_position,
        expected_position,
        epsilon = 1e-12
    );
    let expected_force = target_force(expected_position, config.thrust.max_speed);
    assert_relative_eq!(previous, expected_force, epsilon = 1e-9);
    assert!(previous > 0.5 * config.thrust.max_speed);
    assert!(previous <= config.thrust.max_speed);
}

#[test]
fn test_takeoff_roll_moves_forward() {
    let config = create_test_flight_config();
    let mut app = TestAppBuilder::new().with_start(create_runway_start()).build();

    for _ in 0..240 {
        app.send(ControlEvent::Throttle {
            left: 1.0,
            right: 1.0,
        });
        app.step();
        assert_telemetry_valid(&app.telemetry(), &config);
    }

    let spatial = app.spatial();
    assert_spatial_valid(&spatial);
    assert!(spatial.position.x > 0.0);
    assert!(spatial.velocity.x > 0.0);
    assert!(app.telemetry().forward_force > 3000.0);
}

#[test]
fn test_cruise_engages_stabilization() {
    let config = create_test_flight_config();
    let mut app = TestAppBuilder::new().with_start(create_cruise_start()).build();
    app.send(ControlEvent::Throttle {
        left: 0.0,
        right: 0.0,
    });
    app.step();

    let telemetry = app.telemetry();
    assert_telemetry_valid(&telemetry, &config);
    assert!(telemetry.ground_hit);
    assert!(telemetry.height_above_ground > 4900.0);
    assert!(telemetry.stabilization_torque >= config.stabilization.min_torque);
    assert!(telemetry.lift > 0.0);
}

#[test]
fn test_idle_on_runway_stays_put() {
    let mut app = TestAppBuilder::new().with_start(create_runway_start()).build();
    app.run_steps(120);

    let spatial = app.spatial();
    assert_spatial_valid(&spatial);
    assert_eq!(app.telemetry().forward_force, 0.0);
    assert!(spatial.position.x.abs() < 1e-9);
    assert!((spatial.position.z - 13.0).abs() < 1e-6);
}
