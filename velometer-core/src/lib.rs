//! Board-agnostic core logic for the wheel speedometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (light sensor, character display, clock)
//! - Hysteresis rotation detection
//! - Pairwise speed and distance computation
//! - Unit conversion and display-mode cycling
//! - 16x2 screen layout
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod detector;
pub mod mode;
pub mod odometer;
pub mod render;
pub mod traits;
pub mod units;

pub use config::SpeedometerConfig;
pub use detector::{RotationDetector, RotationEvent};
pub use mode::{ModeSelector, SharedMode};
pub use odometer::{Measurement, Odometer};
pub use units::DisplayMode;
