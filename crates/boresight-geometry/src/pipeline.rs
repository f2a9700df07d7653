//! The once-per-frame evaluation: positions + attitude in, angles + HUD point out.

use boresight_core::config::{HudConfig, SolverConfig};
use boresight_core::state::PipelineOutput;
use boresight_core::types::{Orientation, Position3};

use crate::bearing::{bearing_of, bearing_of_direction};
use crate::hud;
use crate::orientation::forward_vector;
use crate::spherical::solve_with;

/// Run bearing → forward → solve → project for one frame.
///
/// Stateless: identical inputs give identical outputs.
pub fn evaluate(
    observer: &Position3,
    target: &Position3,
    orientation: &Orientation,
    hud_config: &HudConfig,
    solver: &SolverConfig,
) -> PipelineOutput {
    let target_bearing = bearing_of(observer, target);
    let forward_vector = forward_vector(orientation.yaw, orientation.pitch, orientation.roll);
    let forward_bearing = bearing_of_direction(&forward_vector);

    let solution = solve_with(&target_bearing, &forward_bearing, solver.pole_angle);
    let angles = solution.angles;
    let hud = hud::project(angles.j, angles.G, orientation.roll, hud_config);

    PipelineOutput {
        target: target_bearing,
        forward: forward_bearing,
        forward_vector,
        angles,
        hud,
        sine_rule_guarded: solution.sine_rule_guarded,
    }
}
