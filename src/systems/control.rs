use bevy::prelude::*;

use crate::{
    components::{
        BodyMut, ControlEvent, FlightController, PhysicsComponent, PlayerController,
        SpatialComponent,
    },
    resources::{GroundResource, NoGround, PhysicsConfig},
};

/// Routes pilot input events to every active player airframe.
pub fn control_input_system(
    mut events: EventReader<ControlEvent>,
    mut query: Query<(&mut FlightController, &PlayerController)>,
) {
    for event in events.read() {
        for (mut controller, player) in query.iter_mut() {
            if player.active {
                controller.handle_event(event);
            }
        }
    }
}

/// Runs one controller tick per airframe and leaves the resulting force and
/// torque on its physics component for the integrator.
pub fn flight_controller_system(
    mut query: Query<(&mut FlightController, &SpatialComponent, &mut PhysicsComponent)>,
    ground: Option<Res<GroundResource>>,
    config: Res<PhysicsConfig>,
    mut warned: Local<bool>,
) {
    let dt = config.timestep;
    if ground.is_none() && !*warned {
        warn!("No ground resource, height above ground will not update");
        *warned = true;
    }

    for (mut controller, spatial, mut physics) in query.iter_mut() {
        let mut body = BodyMut::new(spatial, &mut physics);
        match ground.as_deref() {
            Some(ground) => controller.tick(dt, &mut body, ground),
            None => controller.tick(dt, &mut body, &NoGround),
        };
    }
}

/// Pushes body damping to newly spawned airframes.
pub fn attach_body_system(
    mut query: Query<
        (&FlightController, &SpatialComponent, &mut PhysicsComponent),
        Added<FlightController>,
    >,
) {
    for (controller, spatial, mut physics) in query.iter_mut() {
        let mut body = BodyMut::new(spatial, &mut physics);
        controller.attach(&mut body);
        info!(
            "Airframe attached: linear damping {}, angular damping {}",
            physics.linear_damping, physics.angular_damping
        );
    }
}
