use jetsim::{ControlEvent, GearState, GearSwitch};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_position_eq, create_cruise_start, create_test_flight_config, TestAppBuilder,
};

#[test]
fn test_gear_retracts_and_extends() {
    let gear = create_test_flight_config().gear;
    let mut app = TestAppBuilder::new().with_start(create_cruise_start()).build();

    app.send(ControlEvent::Throttle {
        left: 0.0,
        right: 0.0,
    });
    app.send(ControlEvent::Gear(GearSwitch::Up));
    app.step();
    assert_eq!(app.telemetry().gear_state, GearState::Retracted);
    assert!(app.telemetry().gear_drag > 0.0);

    // Well past five time constants
    app.run_steps(720);
    assert_eq!(app.controller().state().gear.position, gear.retracted);
    assert_eq!(app.telemetry().gear_drag, 0.0);

    app.send(ControlEvent::Gear(GearSwitch::Down));
    app.run_steps(720);
    assert_eq!(app.telemetry().gear_state, GearState::Extended);
    assert_eq!(app.controller().state().gear.position, gear.extended);
}

#[test]
fn test_repeated_switch_is_idempotent() {
    let gear = create_test_flight_config().gear;
    let mut app = TestAppBuilder::new().with_start(create_cruise_start()).build();

    app.send(ControlEvent::Gear(GearSwitch::Up));
    app.run_steps(60);
    let midway = app.controller().state().gear.position;

    // Held lever fires again on release of the binding
    app.send(ControlEvent::Gear(GearSwitch::Up));
    app.step();
    let next = app.controller().state().gear.position;

    assert!(next.z > midway.z);
    assert!(next.z < gear.retracted.z);
    assert_position_eq(&app.controller().state().gear.target, &gear.retracted, 1e-12);
}

#[test]
fn test_extended_gear_drags_on_ground() {
    let config = create_test_flight_config();
    let mut app = TestAppBuilder::new().build();
    app.step();
    app.controller_mut().state_mut().forward_force = 50.0;
    app.send(ControlEvent::Throttle {
        left: 1.0,
        right: 1.0,
    });
    app.step();

    let telemetry = app.telemetry();
    assert_eq!(telemetry.gear_state, GearState::Extended);
    assert_eq!(telemetry.gear_drag, config.gear.drag_penalty);
}
