//! Held-control integration.
//!
//! Each held control moves a position by `move_speed * dt` along its axis or
//! changes an attitude angle by `rotate_speed * dt`. Angles are not wrapped.

use boresight_core::config::ControlRates;
use boresight_core::enums::ControlEffect;

use crate::scene::Scene;

/// Apply every held control for `dt` seconds.
pub fn run(scene: &mut Scene, rates: &ControlRates, dt: f64) {
    let effects: Vec<ControlEffect> = scene.held.iter().map(|c| c.effect()).collect();
    for effect in effects {
        match effect {
            ControlEffect::Translate { role, axis } => {
                let step = rates.move_speed * dt;
                let pos = scene.position_mut(role);
                pos.x += axis[0] * step;
                pos.y += axis[1] * step;
                pos.z += axis[2] * step;
            }
            ControlEffect::Rotate { yaw, pitch, roll } => {
                let step = rates.rotate_speed * dt;
                scene.orientation.yaw += yaw * step;
                scene.orientation.pitch += pitch * step;
                scene.orientation.roll += roll * step;
            }
        }
    }
}
