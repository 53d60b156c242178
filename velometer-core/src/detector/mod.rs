//! Wheel rotation detection
//!
//! Turns a noisy light-intensity signal into clean rotation timing events.
//! Raw samples are averaged in small batches, then passed through a
//! two-threshold (Schmitt trigger) filter.

pub mod averaging;
pub mod hysteresis;

pub use averaging::{averaged_reading, Averager};
pub use hysteresis::{Phase, RotationDetector, RotationEvent, Transition};
