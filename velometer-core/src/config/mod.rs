//! Configuration types
//!
//! Board-agnostic configuration for the speedometer. Values are fixed at
//! build time; the firmware generates its `CONFIG` from `speedometer.toml`.

pub mod types;

pub use types::*;
