pub mod config;
mod ground;

pub use config::{
    AuthorityConfig, AxisFilterConfig, BodyConfig, BrakingConfig, DampingConfig, FlightConfig,
    FlightConfigBuilder, GearConfig, LiftConfig, NormalizerConfig, PhysicsConfig, SensorConfig,
    StabilizationConfig, ThrustConfig,
};
pub use ground::{FlatGround, GroundQuery, GroundResource, HeightMapGround, NoGround};
