//! Math types used for positional audio
//!
//! Positions are world-space coordinates in the same units the game uses for
//! its transforms. Only the handful of aliases the audio layer needs are
//! exported here.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Euclidean distance between two world positions
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (a - b).norm()
}
