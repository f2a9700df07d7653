//! Caller-supplied configuration for the HUD, the solver and the scene.
//!
//! Every struct deserializes with per-field defaults, so a config file only
//! needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::PoleAngle;
use crate::types::{Orientation, Point2, Position3};

/// HUD projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// HUD center in screen pixels (typically the viewport center).
    pub center: Point2,
    pub pixels_per_radian: f64,
    /// Radius clamp as a fraction of `screen_height`.
    pub max_radius_fraction: f64,
    pub screen_height: f64,
    /// Angular range rings around the center, degrees.
    pub range_ring_degrees: Vec<f64>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            center: Point2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            pixels_per_radian: PIXELS_PER_RADIAN,
            max_radius_fraction: HUD_MAX_RADIUS_FRACTION,
            screen_height: SCREEN_HEIGHT,
            range_ring_degrees: HUD_RANGE_RINGS_DEG.to_vec(),
        }
    }
}

impl HudConfig {
    /// Largest marker distance from the center, in pixels.
    pub fn max_radius(&self) -> f64 {
        self.max_radius_fraction * self.screen_height
    }
}

/// Spherical solver options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub pole_angle: PoleAngle,
}

/// Rates applied to held controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlRates {
    /// World units per second.
    pub move_speed: f64,
    /// Radians per second.
    pub rotate_speed: f64,
}

impl Default for ControlRates {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            rotate_speed: ROTATE_SPEED_DEG.to_radians(),
        }
    }
}

/// Initial scene plus everything the frame engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub observer: Position3,
    pub target: Position3,
    pub orientation: Orientation,
    pub hud: HudConfig,
    pub solver: SolverConfig,
    pub controls: ControlRates,
    /// Frame loop rate in Hz.
    pub frame_rate: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let [ox, oy, oz] = INITIAL_OBSERVER;
        let [tx, ty, tz] = INITIAL_TARGET;
        let [yaw, pitch, roll] = INITIAL_ORIENTATION_DEG;
        Self {
            observer: Position3::new(ox, oy, oz),
            target: Position3::new(tx, ty, tz),
            orientation: Orientation::from_degrees(yaw, pitch, roll),
            hud: HudConfig::default(),
            solver: SolverConfig::default(),
            controls: ControlRates::default(),
            frame_rate: FRAME_RATE,
        }
    }
}

impl SceneConfig {
    /// Seconds per frame at the configured rate. Zero falls back to the default.
    pub fn frame_dt(&self) -> f64 {
        if self.frame_rate == 0 {
            DT
        } else {
            1.0 / self.frame_rate as f64
        }
    }
}
