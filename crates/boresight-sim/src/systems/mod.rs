//! Per-frame systems over the scene.
//!
//! Systems are plain functions over `Scene`. They hold no state of their own.

pub mod controls;
pub mod snapshot;
