use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    components::{PhysicsComponent, SpatialComponent},
    resources::{GroundQuery, GroundResource, PhysicsConfig},
    utils::deg_to_rad,
};

/// Advances every reference rigid body by one fixed step and clears the
/// accumulated force and torque.
pub fn physics_integrator_system(
    mut query: Query<(&mut PhysicsComponent, &mut SpatialComponent)>,
    ground: Option<Res<GroundResource>>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    let ground = ground.as_deref().map(|g| g as &dyn GroundQuery);

    for (mut physics, mut spatial) in query.iter_mut() {
        integrate_body(&physics, &mut spatial, dt, &config, ground);
        physics.clear_forces();
    }
}

/// Semi-implicit Euler step of one body.
///
/// Net torque is an angular acceleration in deg/s^2, applied directly
/// without an inertia tensor. Damping follows `v / (1 + dt * damping)`. When
/// `ground` is given the body cannot sink below `ground_clearance` above the
/// surface.
pub fn integrate_body(
    physics: &PhysicsComponent,
    spatial: &mut SpatialComponent,
    dt: f64,
    config: &PhysicsConfig,
    ground: Option<&dyn GroundQuery>,
) {
    if dt <= 0.0 {
        return;
    }

    let acceleration = if physics.mass > 0.0 {
        physics.net_force / physics.mass + config.gravity
    } else {
        config.gravity
    };
    spatial.velocity += acceleration * dt;
    spatial.velocity /= 1.0 + dt * physics.linear_damping.max(0.0);

    let angular_acceleration = physics.net_torque.map(deg_to_rad);
    spatial.angular_velocity += angular_acceleration * dt;
    spatial.angular_velocity /= 1.0 + dt * physics.angular_damping.max(0.0);

    apply_velocity_limits(spatial, config.max_velocity, config.max_angular_velocity);

    spatial.position += spatial.velocity * dt;
    let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
    spatial.attitude = rotation * spatial.attitude;

    if let Some(ground) = ground {
        resolve_ground_contact(spatial, ground, config.ground_clearance);
    }
}

fn apply_velocity_limits(spatial: &mut SpatialComponent, max_vel: f64, max_ang_vel: f64) {
    let speed = spatial.velocity.norm();
    if speed > max_vel {
        spatial.velocity *= max_vel / speed;
    }

    let ang_speed = spatial.angular_velocity.norm();
    if ang_speed > max_ang_vel {
        spatial.angular_velocity *= max_ang_vel / ang_speed;
    }
}

fn resolve_ground_contact(
    spatial: &mut SpatialComponent,
    ground: &dyn GroundQuery,
    clearance: f64,
) {
    // Probe from one clearance above so a body that just sank still finds the surface
    let origin = spatial.position + Vector3::z() * clearance;
    let Some(hit) = ground.raycast_down(&origin, 2.0 * clearance + 1.0) else {
        return;
    };

    let floor = hit.z + clearance;
    if spatial.position.z < floor {
        spatial.position.z = floor;
        if spatial.velocity.z < 0.0 {
            spatial.velocity.z = 0.0;
        }
    }
}
