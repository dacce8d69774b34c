use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Settings of the reference rigid-body integrator.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed step (s).
    pub timestep: f64,
    /// World-frame gravitational acceleration, z up.
    pub gravity: Vector3<f64>,
    pub mass: f64,
    pub max_velocity: f64,
    /// Rad/s.
    pub max_angular_velocity: f64,
    /// Height of the airframe origin above the surface while resting on its gear.
    pub ground_clearance: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0,
            gravity: Vector3::new(0.0, 0.0, -980.0),
            mass: 20_000.0,
            max_velocity: 100_000.0,
            max_angular_velocity: 10.0,
            ground_clearance: 13.0,
        }
    }
}
