pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    ControlEvent, ControlState, FlightController, FlightState, FlightTelemetry, GearState,
    GearSwitch, NormalizedControl,
};
pub use physics::RigidBody;
pub use plugins::{FlightPlugin, FlightSet};
pub use resources::{FlightConfig, GroundQuery, PhysicsConfig};
pub use utils::ConfigError;
