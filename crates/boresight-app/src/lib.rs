//! BORESIGHT front-end driver.
//!
//! Wires the scene engine to a fixed-rate frame loop thread and exposes it
//! through a JSON-lines command bridge for an external renderer.

pub mod config;
pub mod frame_loop;
pub mod ipc;
pub mod state;

pub use boresight_core as core;
