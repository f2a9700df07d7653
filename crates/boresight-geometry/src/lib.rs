//! Angle-derivation engine for BORESIGHT.
//!
//! Converts an observer position and attitude plus a target position into
//! bearing pairs, spherical-triangle angles, and a HUD marker position.
//! Every function is pure and never fails: singularities are clamped or
//! replaced with a defined fallback so the display stays continuous.

pub mod angles;
pub mod bearing;
pub mod hud;
pub mod orientation;
pub mod pipeline;
pub mod spherical;

pub use boresight_core as core;

// Re-export key functions for convenience.
pub use bearing::{bearing_of, bearing_of_direction};
pub use orientation::{body_axes, forward_vector};
pub use pipeline::evaluate;
pub use spherical::{solve, solve_with, SphericalSolution};
