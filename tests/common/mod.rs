mod assertions;
mod fixtures;

// Re-export
pub use assertions::{
    assert_physics_valid, assert_position_eq, assert_spatial_valid, assert_telemetry_valid,
};

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
