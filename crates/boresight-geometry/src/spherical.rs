//! Spherical-triangle solve between the target bearing and the nose bearing.
//!
//! The pole of the triangle is the world +Y direction (az = 0, el = 0).
//! `f` and `h` are the arc lengths from the pole to the target and to the nose,
//! `C` and `D` are the angles those arcs make with the horizon at the pole, and
//! `J` closes the triangle at the pole. The law of cosines then gives the
//! separation `j`, and the law of sines gives `F`.
//!
//! Nothing here fails. Inverse-trig arguments are clamped, `atan2` absorbs the
//! `sin(Az) = 0` and `tan(El) = ∞` cases, and the sine-rule step reports
//! `F = 0` when `j` is too close to zero to divide by.

#![allow(non_snake_case)]

use std::f64::consts::PI;

use boresight_core::constants::SINE_RULE_EPSILON;
use boresight_core::enums::PoleAngle;
use boresight_core::types::{BearingPair, SphericalAngles};

use crate::angles::{clamped_acos, clamped_asin};

/// Full solver result including the intermediates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalSolution {
    pub angles: SphericalAngles,
    /// Arc from the pole to the target.
    pub f: f64,
    /// Arc from the pole to the nose.
    pub h: f64,
    pub C: f64,
    pub D: f64,
    /// True when `|sin(j)|` was at or below the threshold and F fell back to 0.
    pub sine_rule_guarded: bool,
}

/// Solve with the reference pole closure and return the public angles.
pub fn solve(target: &BearingPair, forward: &BearingPair) -> SphericalAngles {
    solve_with(target, forward, PoleAngle::Reference).angles
}

/// Solve with an explicit pole closure.
pub fn solve_with(
    target: &BearingPair,
    forward: &BearingPair,
    pole_angle: PoleAngle,
) -> SphericalSolution {
    let (AzT, ElT) = (target.az, target.el);
    let (AzR, ElR) = (forward.az, forward.el);

    let f = clamped_acos(AzT.cos() * ElT.cos());
    let h = clamped_acos(AzR.cos() * ElR.cos());

    // cot(C) = sin(Az) / tan(El)
    let C = ElT.tan().atan2(AzT.sin());
    let D = ElR.tan().atan2(AzR.sin());

    let J = match pole_angle {
        PoleAngle::Reference => PI - C - D,
        PoleAngle::Included => C - D,
    };

    let j = clamped_acos(f.cos() * h.cos() + f.sin() * h.sin() * J.cos());

    // cot(E) = sin(ElR) / tan(AzR)
    let E = AzR.tan().atan2(ElR.sin());

    let sin_j = j.sin();
    let sine_rule_guarded = sin_j.abs() <= SINE_RULE_EPSILON;
    let F = if sine_rule_guarded {
        0.0
    } else {
        clamped_asin(J.sin() * f.sin() / sin_j)
    };

    let G = PI - E - F;

    SphericalSolution {
        angles: SphericalAngles { j, G, E, F, J },
        f,
        h,
        C,
        D,
        sine_rule_guarded,
    }
}
