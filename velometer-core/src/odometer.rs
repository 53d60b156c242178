//! Speed and distance computation
//!
//! Speed is measured across a pair of rotation events: the first event of
//! a pair only records its timestamp, the second yields one speed sample
//! and adds one wheel circumference to the total. Every other event
//! therefore produces a measurement.
//!
//! All values are kept in feet and feet per second. Unit conversion
//! happens only when rendering.

use crate::config::SpeedometerConfig;
use crate::detector::RotationEvent;

/// Milliseconds per second
const MS_PER_SECOND: f64 = 1000.0;

/// Snapshot of the latest speed and total distance (canonical units)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Speed in feet per second
    pub speed_fps: f64,
    /// Total distance in feet
    pub distance_ft: f64,
}

impl Measurement {
    /// Stationary, nothing travelled
    pub const ZERO: Self = Self {
        speed_fps: 0.0,
        distance_ft: 0.0,
    };
}

/// Odometer state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedState {
    /// First event of the current pair, `None` while waiting for it
    pub last_rotation_ms: Option<u64>,
    /// Last computed speed (ft/s)
    pub speed_fps: f64,
    /// Accumulated distance (ft)
    pub distance_ft: f64,
}

/// Pairwise speed and distance accumulator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Odometer {
    circumference_ft: f64,
    state: SpeedState,
}

impl Odometer {
    /// Create an odometer for a wheel of the given circumference (feet)
    pub const fn new(circumference_ft: f64) -> Self {
        Self {
            circumference_ft,
            state: SpeedState {
                last_rotation_ms: None,
                speed_fps: 0.0,
                distance_ft: 0.0,
            },
        }
    }

    /// Create an odometer from the speedometer configuration
    pub fn from_config(config: &SpeedometerConfig) -> Self {
        Self::new(config.wheel_circumference_ft())
    }

    /// Wheel circumference in feet
    pub fn circumference_ft(&self) -> f64 {
        self.circumference_ft
    }

    /// Raw odometer state
    pub fn state(&self) -> &SpeedState {
        &self.state
    }

    /// Latest speed and distance
    pub fn measurement(&self) -> Measurement {
        Measurement {
            speed_fps: self.state.speed_fps,
            distance_ft: self.state.distance_ft,
        }
    }

    /// Record a rotation event
    ///
    /// Returns a new measurement when `event` completes a pair, `None` when
    /// it starts one. An elapsed time of zero yields an infinite speed; no
    /// clamping is applied.
    pub fn record(&mut self, event: RotationEvent) -> Option<Measurement> {
        let Some(start_ms) = self.state.last_rotation_ms.take() else {
            self.state.last_rotation_ms = Some(event.timestamp_ms);
            return None;
        };

        let elapsed_s = event.timestamp_ms.saturating_sub(start_ms) as f64 / MS_PER_SECOND;
        self.state.speed_fps = self.circumference_ft / elapsed_s;
        self.state.distance_ft += self.circumference_ft;

        Some(self.measurement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn test_first_event_only_records() {
        let mut odometer = Odometer::new(2.0);
        assert_eq!(odometer.record(RotationEvent::at(1000)), None);
        assert_eq!(odometer.state().last_rotation_ms, Some(1000));
        assert_eq!(odometer.measurement(), Measurement::default());
    }

    #[test]
    fn test_pair_yields_speed() {
        let c = 8.125 / 12.0 * PI;
        let mut odometer = Odometer::new(c);

        odometer.record(RotationEvent::at(1000));
        let m = odometer.record(RotationEvent::at(1500)).unwrap();

        assert!((m.speed_fps - c / 0.5).abs() < 1e-12);
        assert_eq!(m.distance_ft, c);
        assert_eq!(odometer.state().last_rotation_ms, None);
    }

    #[test]
    fn test_every_other_event_measures() {
        let mut odometer = Odometer::new(1.0);
        let results: [Option<Measurement>; 4] = [
            odometer.record(RotationEvent::at(0)),
            odometer.record(RotationEvent::at(1000)),
            odometer.record(RotationEvent::at(2000)),
            odometer.record(RotationEvent::at(2500)),
        ];

        assert!(results[0].is_none());
        assert_eq!(results[1].unwrap().speed_fps, 1.0);
        assert!(results[2].is_none());

        let last = results[3].unwrap();
        assert_eq!(last.speed_fps, 2.0);
        assert_eq!(last.distance_ft, 2.0);
    }

    #[test]
    fn test_zero_elapsed_is_infinite() {
        let mut odometer = Odometer::new(1.0);
        odometer.record(RotationEvent::at(500));
        let m = odometer.record(RotationEvent::at(500)).unwrap();
        assert!(m.speed_fps.is_infinite());
        assert_eq!(m.distance_ft, 1.0);
    }

    #[test]
    fn test_from_config() {
        let odometer = Odometer::from_config(&SpeedometerConfig::DEFAULT);
        assert_eq!(
            odometer.circumference_ft(),
            SpeedometerConfig::DEFAULT.wheel_circumference_ft()
        );
    }
}
