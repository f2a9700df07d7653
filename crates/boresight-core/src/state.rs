//! Per-frame outputs handed to the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::enums::PoleAngle;
use crate::types::*;

/// Result of one pipeline evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Bearing of the target from the observer (AzT, ElT).
    pub target: BearingPair,
    /// Bearing of the observer's nose (AzR, ElR).
    pub forward: BearingPair,
    /// Unit forward vector the nose bearing was taken from.
    pub forward_vector: Vector3,
    pub angles: SphericalAngles,
    pub hud: HudPoint,
    /// True when the sine-rule step fell back to F = 0.
    pub sine_rule_guarded: bool,
}

/// Complete scene state broadcast after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: FrameTime,
    pub paused: bool,
    pub observer: Position3,
    pub target: Position3,
    pub orientation: Orientation,
    pub body: BodyAxes,
    /// Straight-line observer–target distance.
    pub range: f64,
    pub pole_angle: PoleAngle,
    pub output: PipelineOutput,
    /// HUD center the marker and rings are drawn around.
    pub hud_center: Point2,
    /// Pixel radii of the angular range rings.
    pub hud_rings: Vec<f64>,
    /// Text readouts in degrees, one entry per line.
    pub readout: Vec<String>,
}
