//! Frame engine for BORESIGHT.
//!
//! Owns the observer/target scene, applies queued commands and held controls
//! once per frame, evaluates the angle pipeline, and produces `FrameSnapshot`s
//! for the rendering collaborator.

pub mod engine;
pub mod readout;
pub mod scene;
pub mod systems;

pub use boresight_core as core;
pub use engine::SceneEngine;

#[cfg(test)]
mod tests;
