//! Core types and definitions for the BORESIGHT bearing display.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric value types, configuration, commands, frame snapshots, and
//! constants. It has no dependency on any rendering or runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;
