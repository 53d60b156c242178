//! Configuration type definitions

use core::f64::consts::PI;

/// Largest value a 12-bit ADC sample can take
pub const ADC_MAX: u16 = 4095;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Wheel diameter must be a positive, finite number of inches
    InvalidWheelDiameter,
    /// High threshold must sit strictly above the low threshold
    ThresholdOrder,
    /// A threshold lies outside the 12-bit ADC range
    ThresholdOutOfRange,
    /// At least one sample is needed per averaged reading
    ZeroSampleCount,
}

/// Speedometer configuration
///
/// Thresholds are in raw ADC counts (0-4095). The band between them is the
/// hysteresis dead-zone: an averaged reading must fall to `low_threshold`
/// and then climb back to `high_threshold` before a marker pass counts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedometerConfig {
    /// Wheel diameter in inches
    pub wheel_diameter_in: f64,
    /// Averaged reading at or below this is "dark" (marker entering view)
    pub low_threshold: u16,
    /// Averaged reading at or above this is "light" (marker leaving view)
    pub high_threshold: u16,
    /// Samples averaged into one reading
    pub samples_per_reading: u8,
    /// Minimum spacing between accepted mode button presses (ms)
    pub debounce_ms: u64,
    /// Decimal places shown for speed and distance
    pub decimals: u8,
}

impl SpeedometerConfig {
    /// Default configuration: 8.125" wheel, 1500/2500 thresholds
    pub const DEFAULT: Self = Self {
        wheel_diameter_in: 8.125,
        low_threshold: 1500,
        high_threshold: 2500,
        samples_per_reading: 10,
        debounce_ms: 300,
        decimals: 2,
    };

    /// Wheel circumference in feet
    pub fn wheel_circumference_ft(&self) -> f64 {
        (self.wheel_diameter_in / INCHES_PER_FOOT) * PI
    }

    /// Check the configuration for values the detector cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.wheel_diameter_in.is_finite() || self.wheel_diameter_in <= 0.0 {
            return Err(ConfigError::InvalidWheelDiameter);
        }

        if self.low_threshold > ADC_MAX || self.high_threshold > ADC_MAX {
            return Err(ConfigError::ThresholdOutOfRange);
        }

        if self.high_threshold <= self.low_threshold {
            return Err(ConfigError::ThresholdOrder);
        }

        if self.samples_per_reading == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }

        Ok(())
    }
}

impl Default for SpeedometerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SpeedometerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_circumference() {
        let config = SpeedometerConfig::DEFAULT;
        let expected = 8.125 / 12.0 * PI;
        assert!((config.wheel_circumference_ft() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = SpeedometerConfig {
            low_threshold: 2500,
            high_threshold: 2500,
            ..SpeedometerConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let config = SpeedometerConfig {
            high_threshold: 5000,
            ..SpeedometerConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOutOfRange));
    }

    #[test]
    fn test_rejects_bad_wheel() {
        let config = SpeedometerConfig {
            wheel_diameter_in: 0.0,
            ..SpeedometerConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWheelDiameter));

        let config = SpeedometerConfig {
            wheel_diameter_in: f64::NAN,
            ..SpeedometerConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWheelDiameter));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let config = SpeedometerConfig {
            samples_per_reading: 0,
            ..SpeedometerConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSampleCount));
    }
}
