//! Projection of (j, G, roll) onto the 2D HUD.
//!
//! Angle 0 points straight up from the center and increases clockwise on
//! screen. Radius encodes `j` only, so rolling swings the marker around the
//! center at constant distance.

#![allow(non_snake_case)]

use boresight_core::config::HudConfig;
use boresight_core::types::HudPoint;

use crate::angles::to_radians;

/// Marker distance from the center for separation `j`, clamped to the
/// configured maximum.
pub fn marker_radius(j: f64, config: &HudConfig) -> f64 {
    (config.pixels_per_radian * j).min(config.max_radius())
}

/// Screen position of the HUD marker.
pub fn project(j: f64, G: f64, roll: f64, config: &HudConfig) -> HudPoint {
    let radius = marker_radius(j, config);
    let hud_angle = G + roll;
    let (s, c) = hud_angle.sin_cos();
    HudPoint {
        x: config.center.x + radius * s,
        y: config.center.y - radius * c,
    }
}

/// Pixel radius of an angular range ring given in degrees. Not clamped.
pub fn ring_radius(degrees: f64, config: &HudConfig) -> f64 {
    config.pixels_per_radian * to_radians(degrees)
}

/// Pixel radii of every configured range ring.
pub fn ring_radii(config: &HudConfig) -> Vec<f64> {
    config
        .range_ring_degrees
        .iter()
        .map(|&d| ring_radius(d, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boresight_core::types::Point2;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_zero_angle_points_up() {
        let config = HudConfig::default();
        let p = project(0.5, 0.0, 0.0, &config);
        assert!((p.x - 640.0).abs() < 1e-12);
        assert!((p.y - (360.0 - 110.0)).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_turn_points_right() {
        let config = HudConfig::default();
        let p = project(0.5, FRAC_PI_2, 0.0, &config);
        assert!((p.x - 750.0).abs() < 1e-9);
        assert!((p.y - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_roll_adds_to_bearing() {
        let config = HudConfig::default();
        let a = project(0.3, 1.0, 0.25, &config);
        let b = project(0.3, 1.25, 0.0, &config);
        assert!((a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12);
    }

    #[test]
    fn test_radius_clamped() {
        let config = HudConfig::default();
        let p = project(PI, 0.7, 0.0, &config);
        assert!((p.distance_to(&config.center) - 324.0).abs() < 1e-9);
        assert_eq!(marker_radius(PI, &config), config.max_radius());
    }

    #[test]
    fn test_custom_center_and_scale() {
        let config = HudConfig {
            center: Point2::new(100.0, 50.0),
            pixels_per_radian: 10.0,
            max_radius_fraction: 1.0,
            screen_height: 100.0,
            ..Default::default()
        };
        let p = project(2.0, PI, 0.0, &config);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 70.0).abs() < 1e-9, "angle π points down");
    }

    #[test]
    fn test_default_ring_radii() {
        let radii = ring_radii(&HudConfig::default());
        assert_eq!(radii.len(), 3);
        assert!((radii[0] - 220.0 * 10f64.to_radians()).abs() < 1e-12);
        assert!((radii[2] - 220.0 * 30f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_half_turn_ring_is_pi_scaled() {
        let config = HudConfig::default();
        assert!((ring_radius(180.0, &config) - 220.0 * PI).abs() < 1e-12);
        assert_eq!(ring_radius(0.0, &config), 0.0);
    }
}
