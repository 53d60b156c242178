//! Build-time configuration
//!
//! `build.rs` validates `speedometer.toml` and emits the `CONFIG` constant
//! included here, so the wheel circumference and thresholds are fixed at
//! compile time.

use velometer_core::SpeedometerConfig;

include!(concat!(env!("OUT_DIR"), "/speedometer_config.rs"));
