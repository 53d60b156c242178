//! Optical sensor and marker indicator traits

/// Trait for the reflective light sensor
///
/// Implementations return one raw intensity sample (12-bit, 0-4095).
/// Reads are synchronous and never fail; a disconnected sensor simply
/// reports whatever the ADC pin floats to.
pub trait LightSensor {
    /// Take a single raw sample
    fn sample(&mut self) -> u16;
}

/// Trait for the "marker detected" debug output (buzzer or LED)
pub trait MarkerOutput {
    /// Drive the indicator on or off
    fn set_active(&mut self, on: bool);
}

/// No-op indicator for builds without the debug output wired
impl MarkerOutput for () {
    fn set_active(&mut self, _on: bool) {}
}
