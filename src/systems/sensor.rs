use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::FlightState,
    resources::{GroundQuery, SensorConfig},
};

/// Measures height above terrain straight below `origin`.
///
/// A hit overwrites `height_above_ground`; a miss leaves it untouched, so
/// "no ground found" is never read as "on the ground". Returns the new
/// height on a hit.
pub fn sense_ground<G: GroundQuery + ?Sized>(
    state: &mut FlightState,
    origin: &Vector3<f64>,
    ground: &G,
    config: &SensorConfig,
) -> Option<f64> {
    match ground.raycast_down(origin, config.ray_length) {
        Some(hit) => {
            let height = origin.z - hit.z;
            state.height_above_ground = height;
            state.ground_acquired = true;
            Some(height)
        }
        None => {
            if !state.ground_acquired {
                debug!(
                    "No ground below {:?}, height held at {}",
                    origin, state.height_above_ground
                );
            }
            None
        }
    }
}
