//! Sample averaging
//!
//! One averaged reading is the integer mean of a fixed number of
//! consecutive raw samples.

use crate::traits::LightSensor;

/// Incremental averager
///
/// Feed raw samples one at a time; every `count` samples yields the mean
/// and the accumulator starts over. Lets async callers await between
/// individual ADC conversions.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Averager {
    count: u8,
    taken: u8,
    sum: u32,
}

impl Averager {
    /// Create an averager over `count` samples (minimum 1)
    pub const fn new(count: u8) -> Self {
        Self {
            count: if count == 0 { 1 } else { count },
            taken: 0,
            sum: 0,
        }
    }

    /// Samples per reading
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Add a sample; returns the mean once `count` samples are in
    pub fn push(&mut self, sample: u16) -> Option<u16> {
        self.sum += sample as u32;
        self.taken += 1;

        if self.taken < self.count {
            return None;
        }

        let mean = (self.sum / self.count as u32) as u16;
        self.taken = 0;
        self.sum = 0;
        Some(mean)
    }

    /// Drop any partially accumulated reading
    pub fn reset(&mut self) {
        self.taken = 0;
        self.sum = 0;
    }
}

/// Take `count` samples from `sensor` and return their integer mean
pub fn averaged_reading<S: LightSensor>(sensor: &mut S, count: u8) -> u16 {
    let mut averager = Averager::new(count);
    loop {
        if let Some(mean) = averager.push(sensor.sample()) {
            return mean;
        }
    }
}
