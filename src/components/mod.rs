pub mod controller;
pub mod controls;
pub mod flight;
pub mod gear;
pub mod physics;
pub mod spatial;

pub use controller::{FlightController, PlayerController};
pub use controls::{ControlEvent, ControlState, GearSwitch, NormalizedControl};
pub use flight::{FlightState, FlightTelemetry};
pub use gear::{GearState, LandingGear};
pub use physics::{BodyMut, PhysicsComponent};
pub use spatial::SpatialComponent;
