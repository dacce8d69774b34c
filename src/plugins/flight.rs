use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{
        ControlEvent, FlightController, PhysicsComponent, PlayerController, SpatialComponent,
    },
    resources::{FlatGround, FlightConfig, GroundResource, PhysicsConfig},
    systems::{
        attach_body_system, control_input_system, flight_controller_system,
        physics_integrator_system,
    },
    utils::ConfigError,
};

/// Fixed-step stages: events reach the controllers, controllers push force
/// and torque, then bodies integrate.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Controller,
    Integration,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupSet {
    SpawnPlayer,
}

/// Spawns one player airframe on a reference rigid body and drives it on
/// the fixed timestep.
pub struct FlightPlugin {
    controller: FlightController,
    physics: PhysicsConfig,
    start: SpatialComponent,
}

impl FlightPlugin {
    /// Validates both configurations. The airframe starts at rest on flat
    /// ground at elevation zero, sitting on its gear.
    pub fn new(config: FlightConfig, physics: PhysicsConfig) -> Result<Self, ConfigError> {
        if !physics.timestep.is_finite() || physics.timestep <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "physics.timestep must be positive, got {}",
                physics.timestep
            )));
        }
        if !physics.mass.is_finite() || physics.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "physics.mass must be positive, got {}",
                physics.mass
            )));
        }

        let start =
            SpatialComponent::at_position(Vector3::new(0.0, 0.0, physics.ground_clearance));
        Ok(Self {
            controller: FlightController::new(config)?,
            physics,
            start,
        })
    }

    pub fn with_start(mut self, start: SpatialComponent) -> Self {
        self.start = start;
        self
    }

    fn setup_airframe(
        mut commands: Commands,
        controller: FlightController,
        start: SpatialComponent,
        mass: f64,
    ) {
        info!("Spawning airframe at {:?}", start.position);
        commands.spawn((
            controller,
            start,
            PhysicsComponent::new(mass),
            PlayerController::new(),
            Name::new("Airframe"),
        ));
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let controller = self.controller.clone();
        let start = self.start;
        let mass = self.physics.mass;

        if !app.world().contains_resource::<GroundResource>() {
            app.insert_resource(GroundResource::new(FlatGround::new(0.0)));
        }

        app.insert_resource(self.physics.clone())
            .add_event::<ControlEvent>()
            .configure_sets(
                FixedUpdate,
                (FlightSet::Input, FlightSet::Controller, FlightSet::Integration).chain(),
            )
            .add_systems(
                Startup,
                (move |commands: Commands| {
                    Self::setup_airframe(commands, controller.clone(), start, mass)
                })
                .in_set(StartupSet::SpawnPlayer),
            )
            .add_systems(
                FixedUpdate,
                (
                    (attach_body_system, control_input_system)
                        .chain()
                        .in_set(FlightSet::Input),
                    flight_controller_system.in_set(FlightSet::Controller),
                    physics_integrator_system.in_set(FlightSet::Integration),
                ),
            );

        app.insert_resource(Time::<Fixed>::from_seconds(self.physics.timestep));
    }
}
