//! GPIO marker indicator
//!
//! Drives a buzzer or LED while the reflective marker is in view.

use embedded_hal::digital::OutputPin;
use velometer_core::traits::MarkerOutput;

/// GPIO marker indicator
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioMarker<P> {
    pin: P,
    /// If true, indicator ON = pin LOW
    inverted: bool,
    /// Current logical state
    on: bool,
}

impl<P: OutputPin> GpioMarker<P> {
    /// Create a new indicator, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut marker = Self {
            pin,
            inverted,
            on: false,
        };
        marker.set_active(false);
        marker
    }

    /// Create an active-high indicator
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Check whether the indicator is currently on
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl<P: OutputPin> MarkerOutput for GpioMarker<P> {
    fn set_active(&mut self, on: bool) {
        self.on = on;

        // Debug side channel only; a pin error must not disturb timing
        let _ = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}
