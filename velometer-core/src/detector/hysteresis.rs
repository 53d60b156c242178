//! Two-threshold rotation detector
//!
//! The reflective marker darkens the sensor as it passes. A pass counts only
//! after the averaged reading first falls to the low threshold and then
//! rises back to the high threshold. Readings between the two thresholds
//! never change state, so noise around a single level cannot produce
//! spurious events.

use super::averaging::averaged_reading;
use crate::config::SpeedometerConfig;
use crate::traits::{Clock, LightSensor, MarkerOutput};

/// Detector phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for the marker to darken the sensor
    #[default]
    AwaitingDark,
    /// Marker in view, waiting for the signal to brighten again
    AwaitingLight,
}

/// Phase change reported by [`RotationDetector::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Reading fell to the low threshold
    MarkerEntered,
    /// Reading rose back to the high threshold; one rotation elapsed
    MarkerLeft,
}

/// A confirmed marker pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationEvent {
    /// Time the light phase completed (ms since boot)
    pub timestamp_ms: u64,
}

impl RotationEvent {
    /// Create an event at `timestamp_ms`
    pub const fn at(timestamp_ms: u64) -> Self {
        Self { timestamp_ms }
    }
}

/// Hysteresis rotation detector
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationDetector {
    low_threshold: u16,
    high_threshold: u16,
    samples_per_reading: u8,
    phase: Phase,
}

impl RotationDetector {
    /// Create a detector
    ///
    /// `high_threshold` must be greater than `low_threshold`; see
    /// [`SpeedometerConfig::validate`].
    pub const fn new(low_threshold: u16, high_threshold: u16, samples_per_reading: u8) -> Self {
        Self {
            low_threshold,
            high_threshold,
            samples_per_reading,
            phase: Phase::AwaitingDark,
        }
    }

    /// Create a detector from the speedometer configuration
    pub const fn from_config(config: &SpeedometerConfig) -> Self {
        Self::new(
            config.low_threshold,
            config.high_threshold,
            config.samples_per_reading,
        )
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Samples averaged per reading
    pub fn samples_per_reading(&self) -> u8 {
        self.samples_per_reading
    }

    /// Return to waiting for dark
    pub fn reset(&mut self) {
        self.phase = Phase::AwaitingDark;
    }

    /// Advance by one averaged reading
    pub fn update(&mut self, reading: u16) -> Option<Transition> {
        match self.phase {
            Phase::AwaitingDark if reading <= self.low_threshold => {
                self.phase = Phase::AwaitingLight;
                Some(Transition::MarkerEntered)
            }
            Phase::AwaitingLight if reading >= self.high_threshold => {
                self.phase = Phase::AwaitingDark;
                Some(Transition::MarkerLeft)
            }
            _ => None,
        }
    }

    /// Block until one full dark-then-light pass completes
    ///
    /// Holds `marker` active for the light phase. There is no timeout: a
    /// disconnected or saturated sensor keeps this waiting forever.
    pub fn wait_for_rotation<S, C, M>(
        &mut self,
        sensor: &mut S,
        clock: &C,
        marker: &mut M,
    ) -> RotationEvent
    where
        S: LightSensor,
        C: Clock,
        M: MarkerOutput,
    {
        loop {
            let reading = averaged_reading(sensor, self.samples_per_reading);
            match self.update(reading) {
                Some(Transition::MarkerEntered) => marker.set_active(true),
                Some(Transition::MarkerLeft) => {
                    marker.set_active(false);
                    return RotationEvent::at(clock.now_ms());
                }
                None => {}
            }
        }
    }
}
