//! Yaw/pitch/roll to world-space directions.
//!
//! Body forward is +Y. The composed rotation is `Rz(yaw) · Rx(pitch) · Ry(roll)`,
//! so roll (about body Y) is applied first and never moves the forward vector.

use boresight_core::constants::BODY_AXIS_EPSILON;
use boresight_core::types::{BodyAxes, Orientation, Vector3};

/// Rotate `v` about the X axis.
pub fn rotate_x(v: Vector3, angle: f64) -> Vector3 {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x, c * v.y - s * v.z, s * v.y + c * v.z)
}

/// Rotate `v` about the Y axis.
pub fn rotate_y(v: Vector3, angle: f64) -> Vector3 {
    let (s, c) = angle.sin_cos();
    Vector3::new(c * v.x + s * v.z, v.y, -s * v.x + c * v.z)
}

/// Rotate `v` about the Z axis.
pub fn rotate_z(v: Vector3, angle: f64) -> Vector3 {
    let (s, c) = angle.sin_cos();
    Vector3::new(c * v.x - s * v.y, s * v.x + c * v.y, v.z)
}

/// Apply `Rz(yaw) · Rx(pitch) · Ry(roll)` to a body-frame vector.
pub fn body_to_world(v: Vector3, yaw: f64, pitch: f64, roll: f64) -> Vector3 {
    rotate_z(rotate_x(rotate_y(v, roll), pitch), yaw)
}

/// World-space unit forward vector for the given attitude.
///
/// Re-normalized after composition. A zero or non-finite magnitude yields
/// the zero vector.
pub fn forward_vector(yaw: f64, pitch: f64, roll: f64) -> Vector3 {
    body_to_world(Vector3::Y, yaw, pitch, roll).normalize_or_zero()
}

/// Forward, right and up axes for drawing the observer body.
///
/// `right = forward × world_up`, falling back to +X when the nose points
/// straight up or down. `up = right × forward`. Roll is not applied.
pub fn body_axes(orientation: &Orientation) -> BodyAxes {
    let forward = forward_vector(orientation.yaw, orientation.pitch, orientation.roll);
    let cross = forward.cross(&Vector3::Z);
    let right = if cross.length() < BODY_AXIS_EPSILON {
        Vector3::X
    } else {
        cross.normalize_or_zero()
    };
    let up = right.cross(&forward);
    BodyAxes { forward, right, up }
}
