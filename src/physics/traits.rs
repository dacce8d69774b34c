use nalgebra::{UnitQuaternion, Vector3};

/// The rigid body a flight controller drives.
///
/// Integration of force into motion belongs to the implementor. Vectors are
/// world frame, z up. Torques are angular accelerations in degrees per second
/// squared, independent of the body's inertia.
pub trait RigidBody {
    fn add_force(&mut self, force: Vector3<f64>);
    fn add_torque(&mut self, torque: Vector3<f64>);
    fn velocity(&self) -> Vector3<f64>;
    fn position(&self) -> Vector3<f64>;
    fn rotation(&self) -> UnitQuaternion<f64>;
    fn set_linear_damping(&mut self, damping: f64);
    fn set_angular_damping(&mut self, damping: f64);
}
