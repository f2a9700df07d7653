//! Engine constants and display defaults.

/// Sine-rule singularity threshold: F is reported as 0 when |sin(j)| is at
/// or below this value.
pub const SINE_RULE_EPSILON: f64 = 1e-6;

/// Below this length `forward × world_up` is treated as degenerate when
/// building body axes (observer pointing straight up or down).
pub const BODY_AXIS_EPSILON: f64 = 1e-6;

// --- Display ---

/// Default viewport width in pixels.
pub const SCREEN_WIDTH: f64 = 1280.0;

/// Default viewport height in pixels.
pub const SCREEN_HEIGHT: f64 = 720.0;

/// HUD scale: pixels per radian of angular separation.
pub const PIXELS_PER_RADIAN: f64 = 220.0;

/// HUD marker radius clamp as a fraction of the viewport height.
pub const HUD_MAX_RADIUS_FRACTION: f64 = 0.45;

/// Angular range rings drawn around the HUD center (degrees).
pub const HUD_RANGE_RINGS_DEG: [f64; 3] = [10.0, 20.0, 30.0];

// --- Frame loop ---

/// Nominal frame rate (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f64 = 1.0 / FRAME_RATE as f64;

// --- Controls ---

/// Translation rate for held movement controls (world units per second).
pub const MOVE_SPEED: f64 = 5.0;

/// Rotation rate for held attitude controls (degrees per second).
pub const ROTATE_SPEED_DEG: f64 = 45.0;

// --- Initial scene ---

/// Observer start position.
pub const INITIAL_OBSERVER: [f64; 3] = [0.0, 0.0, 2.0];

/// Target start position.
pub const INITIAL_TARGET: [f64; 3] = [8.0, 6.0, 4.0];

/// Observer start attitude, degrees (yaw, pitch, roll).
pub const INITIAL_ORIENTATION_DEG: [f64; 3] = [20.0, -5.0, 15.0];
