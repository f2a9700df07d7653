//! Commands sent from the front end to the frame engine.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Orientation, Position3};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Continuous controls ---
    /// Hold or release a control. Held controls integrate every frame.
    SetControl { control: Control, held: bool },

    // --- Absolute placement ---
    SetObserver { position: Position3 },
    SetTarget { position: Position3 },
    SetOrientation { orientation: Orientation },
    /// Restore the configured initial scene and release all controls.
    Reset,

    // --- Solver ---
    SetPoleAngle { pole_angle: PoleAngle },

    // --- Frame control ---
    Pause,
    Resume,
}
