use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Kinematic state of the reference rigid body. World frame, z up; body
/// frame x forward, y left, z up.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space
    pub position: Vector3<f64>,

    /// Linear velocity in world space
    pub velocity: Vector3<f64>,

    /// Rotation from body to world frame
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Level flight along `heading` (rad, counter-clockwise from +x).
    pub fn at_position_and_speed(position: Vector3<f64>, speed: f64, heading: f64) -> Self {
        let attitude = UnitQuaternion::from_euler_angles(0.0, 0.0, heading);
        Self {
            position,
            velocity: attitude * Vector3::new(speed, 0.0, 0.0),
            attitude,
            angular_velocity: Vector3::zeros(),
        }
    }
}
