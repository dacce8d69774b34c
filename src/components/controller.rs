use bevy::prelude::*;

use crate::{
    components::{
        ControlEvent, ControlState, FlightState, FlightTelemetry, GearSwitch, NormalizedControl,
    },
    physics::RigidBody,
    resources::{FlightConfig, GroundQuery},
    systems::{braking, dynamics, gear, sensor, ControlNormalizer},
    utils::ConfigError,
};

/// Marks the airframe that receives pilot input.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Flight controller of one airframe.
///
/// Input handlers update the filtered controls, the gear lever and the
/// brakes as events arrive. [`FlightController::tick`] runs once per fixed
/// step and pushes the resulting force and torque to a [`RigidBody`].
#[derive(Component, Debug, Clone)]
pub struct FlightController {
    config: FlightConfig,
    normalizer: ControlNormalizer,
    state: FlightState,
    telemetry: FlightTelemetry,
}

impl FlightController {
    /// Validates `config` and builds a controller in its spawn state.
    pub fn new(config: FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            normalizer: ControlNormalizer::new(&config.normalizer),
            state: FlightState::new(&config.gear),
            telemetry: FlightTelemetry::default(),
            config,
        })
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FlightState {
        &mut self.state
    }

    pub fn normalized(&self) -> NormalizedControl {
        self.normalizer.normalized()
    }

    /// Snapshot of the last tick.
    pub fn telemetry(&self) -> &FlightTelemetry {
        &self.telemetry
    }

    /// Back to spawn: zero force and torque, centred controls, gear down.
    pub fn reset(&mut self) {
        self.normalizer.reset();
        self.state.reset(&self.config.gear);
        self.telemetry = FlightTelemetry::default();
        info!("Flight controller reset");
    }

    /// Configures the body's damping. Call once when the airframe spawns.
    pub fn attach<B: RigidBody + ?Sized>(&self, body: &mut B) {
        body.set_linear_damping(self.config.body.linear_damping);
        body.set_angular_damping(self.config.body.angular_damping);
    }

    pub fn handle_event(&mut self, event: &ControlEvent) {
        match *event {
            ControlEvent::Stick { pitch, roll } => self.on_stick(pitch, roll),
            ControlEvent::StickReleased => self.release_stick(),
            ControlEvent::Throttle { left, right } => self.on_throttle(left, right),
            ControlEvent::Rudder(value) => self.on_rudder(value),
            ControlEvent::Gear(switch) => self.on_gear_switch(switch),
            ControlEvent::ToeBrakes { left, right } => self.on_toe_brakes(left, right),
            ControlEvent::Spoiler(value) => self.on_spoiler(value),
        }
    }

    /// Feeds a whole input snapshot through the event handlers.
    pub fn apply_controls(&mut self, controls: &ControlState) {
        for event in controls.clamped().events() {
            self.handle_event(&event);
        }
    }

    pub fn on_stick(&mut self, pitch: f64, roll: f64) {
        self.normalizer.on_stick(pitch, roll);
    }

    pub fn release_stick(&mut self) {
        self.normalizer.release_stick();
    }

    pub fn on_throttle(&mut self, left: f64, right: f64) {
        self.normalizer.on_throttle(left, right);
    }

    pub fn on_rudder(&mut self, value: f64) {
        self.normalizer.on_rudder(value);
    }

    pub fn on_gear_switch(&mut self, switch: GearSwitch) {
        gear::switch_gear(&mut self.state.gear, switch, &self.config.gear);
    }

    pub fn on_toe_brakes(&mut self, left: f64, right: f64) {
        braking::apply_toe_brakes(
            &mut self.state,
            left,
            right,
            &self.config.braking,
            self.config.sensor.ground_threshold,
        );
    }

    pub fn on_spoiler(&mut self, value: f64) {
        braking::apply_spoiler(&mut self.state, value, &self.config.braking);
    }

    /// Advances the airframe by `dt` seconds.
    pub fn tick<B, G>(&mut self, dt: f64, body: &mut B, ground: &G) -> FlightTelemetry
    where
        B: RigidBody + ?Sized,
        G: GroundQuery + ?Sized,
    {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let config = &self.config;
        let state = &mut self.state;
        let control = self.normalizer.normalized();

        let ground_hit =
            sensor::sense_ground(state, &body.position(), ground, &config.sensor).is_some();
        let height = state.height_above_ground;

        let target = dynamics::target_force(control.throttle_position, config.thrust.max_speed);
        state.forward_force =
            dynamics::regulate_force(state.forward_force, target, dt, &config.thrust);
        let gear_drag = gear::update_gear(state, dt, &config.gear);
        state.clamp_force(config.thrust.max_speed);

        let commanded = dynamics::commanded_torque(&control, state.forward_force, height, config);
        state.torque = dynamics::update_torque(&state.torque, &commanded, dt, config);

        let attitude = body.rotation();
        let stabilization = dynamics::stabilization_torque(
            &attitude,
            state.forward_force,
            height,
            &config.stabilization,
        );
        let lift = dynamics::lift_force(&body.velocity(), &attitude, config.lift.coefficient);
        let thrust = dynamics::thrust_force(&attitude, state.forward_force, &config.thrust);

        body.add_force(thrust + lift);
        body.add_torque(attitude * dynamics::body_torque(&state.torque));
        if let Some(torque) = stabilization {
            body.add_torque(torque);
        }

        self.telemetry = FlightTelemetry {
            forward_force: state.forward_force,
            target_force: target,
            height_above_ground: height,
            ground_hit,
            lift: lift.norm(),
            stabilization_torque: stabilization.map_or(0.0, |t| t.norm()),
            commanded_torque: state.torque,
            gear_state: state.gear.state,
            gear_drag,
        };
        debug!(
            "force {:.1}/{:.1} height {:.1} lift {:.1} stab {:.1} gear {:?}",
            self.telemetry.forward_force,
            target,
            height,
            self.telemetry.lift,
            self.telemetry.stabilization_torque,
            self.telemetry.gear_state
        );
        self.telemetry
    }
}
