mod errors;
pub mod math;

pub use errors::ConfigError;
pub use math::{
    clamp_norm, deg_to_rad, forward_vector, interp_to, interp_vector_to, lag_alpha, lerp,
    pitch_angle, rad_to_deg, up_vector,
};
