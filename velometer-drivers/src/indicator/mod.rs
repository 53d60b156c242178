//! Marker indicator outputs

pub mod gpio;

pub use gpio::GpioMarker;
