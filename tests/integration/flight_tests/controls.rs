use jetsim::{ControlEvent, ControlState};
use pretty_assertions::assert_eq;

use crate::common::{create_cruise_start, create_runway_start, TestApp, TestAppBuilder};

fn rolling_app() -> TestApp {
    let mut app = TestAppBuilder::new().with_start(create_runway_start()).build();
    // First step senses the runway
    app.step();
    app.controller_mut().state_mut().forward_force = 100.0;
    app
}

#[test]
fn test_inactive_player_ignores_input() {
    let mut app = TestAppBuilder::new().build();
    app.player_mut().disable();

    app.send(ControlEvent::Throttle {
        left: 1.0,
        right: 1.0,
    });
    app.step();

    assert_eq!(app.controller().normalized().throttle_position, 0.0);
    assert_eq!(app.telemetry().forward_force, 0.0);
}

#[test]
fn test_toe_brakes_slow_rollout() {
    let mut braked = rolling_app();
    let mut coasting = rolling_app();

    braked.send(ControlEvent::ToeBrakes {
        left: 1.0,
        right: 1.0,
    });
    braked.step();
    coasting.step();

    let with_brakes = braked.telemetry().forward_force;
    let without = coasting.telemetry().forward_force;
    assert!(with_brakes < without - 9.0);
}

#[test]
fn test_toe_brakes_ignored_in_flight() {
    let mut app = TestAppBuilder::new().with_start(create_cruise_start()).build();
    app.step();
    app.controller_mut().state_mut().forward_force = 100.0;

    app.controller_mut().on_toe_brakes(1.0, 1.0);
    assert_eq!(app.controller().state().forward_force, 100.0);

    app.controller_mut().on_spoiler(1.0);
    assert_eq!(app.controller().state().forward_force, 90.0);
}

#[test]
fn test_stick_release_centres_controls() {
    let mut app = TestAppBuilder::new().build();
    for _ in 0..10 {
        app.send(ControlEvent::Stick {
            pitch: 0.8,
            roll: -0.5,
        });
    }
    app.step();
    assert!(app.controller().normalized().pitch > 0.5);

    app.send(ControlEvent::StickReleased);
    app.step();

    let control = app.controller().normalized();
    assert_eq!(control.pitch, 0.0);
    assert_eq!(control.roll, 0.0);
}

#[test]
fn test_control_snapshot_matches_events() {
    let mut from_snapshot = TestAppBuilder::new().build();
    let mut from_events = TestAppBuilder::new().build();
    let controls = ControlState {
        stick_pitch: 0.5,
        throttle_left: 0.2,
        throttle_right: -0.2,
        rudder: 0.4,
        ..ControlState::idle()
    };

    from_snapshot.controller_mut().apply_controls(&controls);
    for event in controls.events() {
        from_events.send(event);
    }
    from_snapshot.step();
    from_events.step();

    assert_eq!(
        from_snapshot.controller().normalized(),
        from_events.controller().normalized()
    );
    assert_eq!(from_snapshot.telemetry(), from_events.telemetry());
}

#[test]
fn test_reset_returns_to_spawn() {
    let mut app = TestAppBuilder::new().build();
    for _ in 0..60 {
        app.send(ControlEvent::Throttle {
            left: 1.0,
            right: 1.0,
        });
        app.step();
    }
    assert!(app.telemetry().forward_force > 0.0);

    app.controller_mut().reset();

    let state = app.controller().state().clone();
    assert_eq!(state.forward_force, 0.0);
    assert_eq!(state.height_above_ground, 0.0);
    assert_eq!(app.controller().normalized().throttle_position, 0.0);
}

#[test]
fn test_event_buffer_stays_bounded() {
    let mut app = TestAppBuilder::new().build();
    let blend = app.controller().config().normalizer.throttle.blend;

    let mut expected = 0.0;
    for _ in 0..200 {
        app.send(ControlEvent::Throttle {
            left: 0.0,
            right: 0.0,
        });
        app.step();
        expected += (1.0 - expected) * blend;
        assert!(app.pending_events() <= 2);
    }

    // Every event was applied exactly once
    assert_eq!(app.controller().normalized().throttle_position, expected);

    app.run_steps(2);
    assert_eq!(app.pending_events(), 0);
}
