//! Snapshot system: evaluates the pipeline and builds a `FrameSnapshot`.
//!
//! Read-only over the scene.

use boresight_core::config::{HudConfig, SolverConfig};
use boresight_core::state::FrameSnapshot;
use boresight_core::types::FrameTime;
use boresight_geometry::{body_axes, evaluate, hud};

use crate::readout;
use crate::scene::Scene;

/// Build the snapshot for the current scene.
pub fn build_snapshot(
    scene: &Scene,
    time: &FrameTime,
    paused: bool,
    hud_config: &HudConfig,
    solver: &SolverConfig,
) -> FrameSnapshot {
    let output = evaluate(
        &scene.observer,
        &scene.target,
        &scene.orientation,
        hud_config,
        solver,
    );
    if output.sine_rule_guarded {
        log::trace!(
            "sine-rule guard active at frame {} (j = {:e})",
            time.frame,
            output.angles.j
        );
    }

    FrameSnapshot {
        time: *time,
        paused,
        observer: scene.observer,
        target: scene.target,
        orientation: scene.orientation,
        body: body_axes(&scene.orientation),
        range: scene.observer.range_to(&scene.target),
        pole_angle: solver.pole_angle,
        output,
        hud_center: hud_config.center,
        hud_rings: hud::ring_radii(hud_config),
        readout: readout::angle_lines(&output).to_vec(),
    }
}
