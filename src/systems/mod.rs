pub mod braking;
mod control;
pub mod dynamics;
pub mod gear;
mod integrator;
pub mod normalizer;
pub mod sensor;

pub use control::{attach_body_system, control_input_system, flight_controller_system};
pub use integrator::{integrate_body, physics_integrator_system};
pub use normalizer::{AxisFilter, ControlNormalizer};
