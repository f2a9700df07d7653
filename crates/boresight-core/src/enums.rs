//! Enumeration types shared by the engine and its callers.

use serde::{Deserialize, Serialize};

/// How the solver closes the spherical triangle at the shared pole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoleAngle {
    /// `J = π − C − D`. Bit-compatible with the reference HUD.
    #[default]
    Reference,
    /// `J = C − D`. `j` becomes the true angle between target and nose.
    Included,
}

/// A continuous control that is either held or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Control {
    ObserverPosX,
    ObserverNegX,
    ObserverPosY,
    ObserverNegY,
    ObserverPosZ,
    ObserverNegZ,
    TargetPosX,
    TargetNegX,
    TargetPosY,
    TargetNegY,
    TargetPosZ,
    TargetNegZ,
    YawIncrease,
    YawDecrease,
    PitchIncrease,
    PitchDecrease,
    RollIncrease,
    RollDecrease,
}

/// Which entity a movement control acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRole {
    Observer,
    Target,
}

/// What a held control does for one second of frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEffect {
    /// Translate an entity along a unit axis, scaled by the move speed.
    Translate {
        role: EntityRole,
        axis: [f64; 3],
    },
    /// Change yaw/pitch/roll by the sign, scaled by the rotate speed.
    Rotate { yaw: f64, pitch: f64, roll: f64 },
}

impl Control {
    pub const ALL: [Control; 18] = [
        Control::ObserverPosX,
        Control::ObserverNegX,
        Control::ObserverPosY,
        Control::ObserverNegY,
        Control::ObserverPosZ,
        Control::ObserverNegZ,
        Control::TargetPosX,
        Control::TargetNegX,
        Control::TargetPosY,
        Control::TargetNegY,
        Control::TargetPosZ,
        Control::TargetNegZ,
        Control::YawIncrease,
        Control::YawDecrease,
        Control::PitchIncrease,
        Control::PitchDecrease,
        Control::RollIncrease,
        Control::RollDecrease,
    ];

    pub fn effect(self) -> ControlEffect {
        use ControlEffect::{Rotate, Translate};
        use EntityRole::{Observer, Target};
        match self {
            Control::ObserverPosX => Translate { role: Observer, axis: [1.0, 0.0, 0.0] },
            Control::ObserverNegX => Translate { role: Observer, axis: [-1.0, 0.0, 0.0] },
            Control::ObserverPosY => Translate { role: Observer, axis: [0.0, 1.0, 0.0] },
            Control::ObserverNegY => Translate { role: Observer, axis: [0.0, -1.0, 0.0] },
            Control::ObserverPosZ => Translate { role: Observer, axis: [0.0, 0.0, 1.0] },
            Control::ObserverNegZ => Translate { role: Observer, axis: [0.0, 0.0, -1.0] },
            Control::TargetPosX => Translate { role: Target, axis: [1.0, 0.0, 0.0] },
            Control::TargetNegX => Translate { role: Target, axis: [-1.0, 0.0, 0.0] },
            Control::TargetPosY => Translate { role: Target, axis: [0.0, 1.0, 0.0] },
            Control::TargetNegY => Translate { role: Target, axis: [0.0, -1.0, 0.0] },
            Control::TargetPosZ => Translate { role: Target, axis: [0.0, 0.0, 1.0] },
            Control::TargetNegZ => Translate { role: Target, axis: [0.0, 0.0, -1.0] },
            Control::YawIncrease => Rotate { yaw: 1.0, pitch: 0.0, roll: 0.0 },
            Control::YawDecrease => Rotate { yaw: -1.0, pitch: 0.0, roll: 0.0 },
            Control::PitchIncrease => Rotate { yaw: 0.0, pitch: 1.0, roll: 0.0 },
            Control::PitchDecrease => Rotate { yaw: 0.0, pitch: -1.0, roll: 0.0 },
            Control::RollIncrease => Rotate { yaw: 0.0, pitch: 0.0, roll: 1.0 },
            Control::RollDecrease => Rotate { yaw: 0.0, pitch: 0.0, roll: -1.0 },
        }
    }
}
