//! Azimuth/elevation of one point relative to another.
//!
//! Azimuth is `atan2(dx, dy)`: measured from +Y toward +X. Every downstream
//! formula in the solver depends on this argument order.

use boresight_core::types::{BearingPair, Position3, Vector3};

/// Bearing of `point` as seen from `origin`.
///
/// A coincident point yields (0, 0).
pub fn bearing_of(origin: &Position3, point: &Position3) -> BearingPair {
    bearing_of_direction(&origin.displacement_to(point))
}

/// Bearing of a direction vector against the world axes. Scale-invariant.
pub fn bearing_of_direction(v: &Vector3) -> BearingPair {
    let az = v.x.atan2(v.y);
    let el = v.z.atan2(v.horizontal_length());
    BearingPair { az, el }
}

/// Straight-line distance from `origin` to `point`.
pub fn range(origin: &Position3, point: &Position3) -> f64 {
    origin.range_to(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_axis_bearings() {
        let o = Position3::default();
        let b = bearing_of(&o, &Position3::new(0.0, 5.0, 0.0));
        assert_eq!((b.az, b.el), (0.0, 0.0));

        let b = bearing_of(&o, &Position3::new(3.0, 0.0, 0.0));
        assert!((b.az - FRAC_PI_2).abs() < 1e-15, "+X is a quarter turn from +Y");

        let b = bearing_of(&o, &Position3::new(-3.0, 0.0, 0.0));
        assert!((b.az + FRAC_PI_2).abs() < 1e-15);

        let b = bearing_of(&o, &Position3::new(0.0, -2.0, 0.0));
        assert!((b.az - PI).abs() < 1e-15, "behind is +π, not −π");

        let b = bearing_of(&o, &Position3::new(0.0, 0.0, 7.0));
        assert!((b.el - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_relative_to_origin() {
        let b = bearing_of(&Position3::new(1.0, 1.0, 1.0), &Position3::new(2.0, 2.0, 1.0 + 2f64.sqrt()));
        assert!((b.az - FRAC_PI_4).abs() < 1e-12);
        assert!((b.el - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_target_bearing() {
        let b = bearing_of(&Position3::new(0.0, 0.0, 2.0), &Position3::new(8.0, 6.0, 4.0));
        assert!((b.az - 0.927_295_218_001_612_2).abs() < 1e-12);
        assert!((b.el - 0.197_395_559_849_880_75).abs() < 1e-12);
    }

    #[test]
    fn test_direction_is_scale_invariant() {
        let v = Vector3::new(-0.3, 0.9, -0.1);
        let a = bearing_of_direction(&v);
        let b = bearing_of_direction(&v.scale(250.0));
        assert!((a.az - b.az).abs() < 1e-15);
        assert!((a.el - b.el).abs() < 1e-15);
    }

    #[test]
    fn test_coincident_points_bear_zero() {
        let p = Position3::new(4.0, -1.0, 9.0);
        let b = bearing_of(&p, &p);
        assert_eq!(b, BearingPair::new(0.0, 0.0));
        assert_eq!(range(&p, &p), 0.0);
    }
}
