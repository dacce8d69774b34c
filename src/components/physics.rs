use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::{components::SpatialComponent, physics::RigidBody};

/// Mass, damping and the force/torque accumulated for the next integration
/// step of the reference rigid body.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub linear_damping: f64,
    pub angular_damping: f64,
    /// World-frame force accumulated since the last step.
    pub net_force: Vector3<f64>,
    /// World-frame angular acceleration (deg/s^2) accumulated since the last step.
    pub net_torque: Vector3<f64>,
}

impl PhysicsComponent {
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            linear_damping: 0.0,
            angular_damping: 0.0,
            net_force: Vector3::zeros(),
            net_torque: Vector3::zeros(),
        }
    }

    pub fn clear_forces(&mut self) {
        self.net_force = Vector3::zeros();
        self.net_torque = Vector3::zeros();
    }
}

/// Borrowed view of an entity's reference rigid body.
pub struct BodyMut<'a> {
    pub spatial: &'a SpatialComponent,
    pub physics: &'a mut PhysicsComponent,
}

impl<'a> BodyMut<'a> {
    pub fn new(spatial: &'a SpatialComponent, physics: &'a mut PhysicsComponent) -> Self {
        Self { spatial, physics }
    }
}

impl RigidBody for BodyMut<'_> {
    fn add_force(&mut self, force: Vector3<f64>) {
        self.physics.net_force += force;
    }

    fn add_torque(&mut self, torque: Vector3<f64>) {
        self.physics.net_torque += torque;
    }

    fn velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    fn rotation(&self) -> UnitQuaternion<f64> {
        self.spatial.attitude
    }

    fn set_linear_damping(&mut self, damping: f64) {
        self.physics.linear_damping = damping;
    }

    fn set_angular_damping(&mut self, damping: f64) {
        self.physics.angular_damping = damping;
    }
}
