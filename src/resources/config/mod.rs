pub mod builder;
pub mod flight;
pub mod physics;

pub use builder::FlightConfigBuilder;
pub use flight::{
    AuthorityConfig, AxisFilterConfig, BodyConfig, BrakingConfig, DampingConfig, FlightConfig,
    GearConfig, LiftConfig, NormalizerConfig, SensorConfig, StabilizationConfig, ThrustConfig,
};
pub use physics::PhysicsConfig;
