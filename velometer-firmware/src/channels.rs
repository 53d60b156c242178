//! Shared state between the rotation loop and the UI tasks
//!
//! The rotation loop runs in thread mode; the button and display tasks run
//! on an interrupt-priority executor and may preempt it at any point.
//! Everything here is therefore either atomic or critical-section guarded.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use velometer_core::{DisplayMode, Measurement, SharedMode};

/// Why a redraw was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(defmt::Format)]
pub enum RedrawCause {
    /// A rotation pair produced a new measurement
    Rotation,
    /// The mode button was accepted
    ModeChanged,
}

/// Selected display units (written only by the button task)
pub static DISPLAY_MODE: SharedMode = SharedMode::new(DisplayMode::Feet);

/// Latest measurement (written only by the rotation loop)
pub static MEASUREMENT: Mutex<CriticalSectionRawMutex, Cell<Measurement>> =
    Mutex::new(Cell::new(Measurement::ZERO));

/// Redraw request; a newer request replaces a pending one
pub static REDRAW: Signal<CriticalSectionRawMutex, RedrawCause> = Signal::new();

/// Publish a new measurement and request a redraw
pub fn publish_measurement(measurement: Measurement) {
    MEASUREMENT.lock(|m| m.set(measurement));
    REDRAW.signal(RedrawCause::Rotation);
}

/// Copy out the latest measurement
pub fn latest_measurement() -> Measurement {
    MEASUREMENT.lock(|m| m.get())
}
