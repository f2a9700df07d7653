//! Degree/radian conversion and domain-clamped inverse trig.
//!
//! The clamped variants saturate instead of returning NaN so that
//! dot-product overshoot like `1.0000000000000002` stays harmless.

use std::f64::consts::{PI, TAU};

pub fn to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// `acos` with the argument clamped to [−1, 1]. Result is in [0, π].
pub fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// `asin` with the argument clamped to [−1, 1]. Result is in [−π/2, π/2].
pub fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// Wrap to (−π, π]. The solver never wraps; readouts use this for attitude.
pub fn wrap_pi(a: f64) -> f64 {
    let w = a.rem_euclid(TAU);
    if w > PI {
        w - TAU
    } else {
        w
    }
}

/// Wrap to [0, 2π). Readouts use this for the HUD clock angle.
pub fn wrap_two_pi(a: f64) -> f64 {
    let w = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if w >= TAU {
        0.0
    } else {
        w
    }
}
