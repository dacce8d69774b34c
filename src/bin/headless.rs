use bevy::{log::LogPlugin, prelude::*};
use std::env;

use jetsim::{
    components::{FlightController, SpatialComponent},
    ControlEvent, FlightConfig, FlightPlugin, GearSwitch, PhysicsConfig,
};

/// Fixed steps in the scripted run (60 s at 120 Hz).
const STEPS: usize = 7200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => FlightConfig::from_yaml_file(&path)?,
        None => FlightConfig::default(),
    };
    let physics = PhysicsConfig::default();
    let steps_per_second = (1.0 / physics.timestep).round() as usize;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(FlightPlugin::new(config, physics)?);
    app.finish();
    app.cleanup();
    app.update();

    for step in 0..STEPS {
        for event in scripted_input(step, steps_per_second) {
            app.world_mut().send_event(event);
        }
        app.world_mut().run_schedule(FixedUpdate);
        app.world_mut()
            .resource_mut::<Events<ControlEvent>>()
            .update();

        if step % steps_per_second == 0 {
            log_airframe(&mut app, step / steps_per_second);
        }
    }

    let mut query = app.world_mut().query::<&FlightController>();
    if let Some(controller) = query.iter(app.world()).next() {
        println!("{}", serde_json::to_string_pretty(controller.telemetry())?);
    }
    Ok(())
}

/// Full power on the runway, rotate after ten seconds, gear up once climbing.
fn scripted_input(step: usize, steps_per_second: usize) -> Vec<ControlEvent> {
    let seconds = step / steps_per_second;
    let mut events = vec![ControlEvent::Throttle {
        left: 1.0,
        right: 1.0,
    }];

    if (10..14).contains(&seconds) {
        events.push(ControlEvent::Stick {
            pitch: 0.6,
            roll: 0.0,
        });
    } else if seconds == 14 && step % steps_per_second == 0 {
        events.push(ControlEvent::StickReleased);
    }

    if seconds >= 20 && step % steps_per_second == 0 {
        events.push(ControlEvent::Gear(GearSwitch::Up));
    }
    events
}

fn log_airframe(app: &mut App, seconds: usize) {
    let mut query = app
        .world_mut()
        .query::<(&FlightController, &SpatialComponent)>();
    for (controller, spatial) in query.iter(app.world()) {
        let telemetry = controller.telemetry();
        info!(
            "t={}s pos=({:.0}, {:.0}, {:.0}) force={:.0} height={:.0} gear={:?}",
            seconds,
            spatial.position.x,
            spatial.position.y,
            spatial.position.z,
            telemetry.forward_force,
            telemetry.height_above_ground,
            telemetry.gear_state
        );
    }
}
