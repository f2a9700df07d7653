//! Text readouts of the pipeline angles, in degrees.

use boresight_core::state::PipelineOutput;
use boresight_core::types::Orientation;
use boresight_geometry::angles::{to_degrees, wrap_pi, wrap_two_pi};

/// Two display lines: the bearing pairs, then the solved angles.
pub fn angle_lines(output: &PipelineOutput) -> [String; 2] {
    let a = &output.angles;
    [
        format!(
            "AzT={:.1} deg  ElT={:.1} deg  AzR={:.1} deg  ElR={:.1} deg",
            to_degrees(output.target.az),
            to_degrees(output.target.el),
            to_degrees(output.forward.az),
            to_degrees(output.forward.el),
        ),
        format!(
            "j={:.2} deg  J={:.2} deg  E={:.2} deg  F={:.2} deg  G={:.2} deg",
            to_degrees(a.j),
            to_degrees(a.J),
            to_degrees(a.E),
            to_degrees(a.F),
            to_degrees(a.G),
        ),
    ]
}

/// Attitude wrapped to (−180, 180] and the on-screen marker angle, measured
/// clockwise from straight up, in [0, 360).
pub fn attitude_line(orientation: &Orientation, output: &PipelineOutput) -> String {
    let hud_angle = wrap_two_pi(output.angles.G + orientation.roll);
    format!(
        "yaw={:.1} deg  pitch={:.1} deg  roll={:.1} deg  HUD angle={:.1} deg",
        to_degrees(wrap_pi(orientation.yaw)),
        to_degrees(wrap_pi(orientation.pitch)),
        to_degrees(wrap_pi(orientation.roll)),
        to_degrees(hud_angle),
    )
}
