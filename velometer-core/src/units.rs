//! Display units
//!
//! Four unit systems, cycled by the mode button. Conversion factors are
//! applied to canonical feet / feet-per-second values at render time only.

/// Feet per statute mile
pub const FEET_PER_MILE: f64 = 5280.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Meters per foot (12 in × 2.54 cm / 100)
pub const METERS_PER_FOOT: f64 = 12.0 * 2.54 / 100.0;

/// Kilometers per foot (12 in × 2.54 cm / 100 000)
pub const KILOMETERS_PER_FOOT: f64 = 12.0 * 2.54 / 100_000.0;

/// Selected display unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// ft/sec, total in feet
    #[default]
    Feet = 0,
    /// mi/hr, total in miles
    Miles = 1,
    /// km/hr, total in kilometers
    Kilometers = 2,
    /// m/sec, total in meters
    Meters = 3,
}

impl DisplayMode {
    /// All modes in button order
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Feet,
        DisplayMode::Miles,
        DisplayMode::Kilometers,
        DisplayMode::Meters,
    ];

    /// Next mode in the cycle (wraps Meters → Feet)
    pub const fn next(self) -> Self {
        match self {
            DisplayMode::Feet => DisplayMode::Miles,
            DisplayMode::Miles => DisplayMode::Kilometers,
            DisplayMode::Kilometers => DisplayMode::Meters,
            DisplayMode::Meters => DisplayMode::Feet,
        }
    }

    /// Speed unit label shown at the end of row 0
    pub const fn label(self) -> &'static str {
        match self {
            DisplayMode::Feet => "ft/sec",
            DisplayMode::Miles => "mi/hr",
            DisplayMode::Kilometers => "km/hr",
            DisplayMode::Meters => "m/sec",
        }
    }

    /// Multiplier from feet to this mode's distance unit
    pub fn distance_factor(self) -> f64 {
        match self {
            DisplayMode::Feet => 1.0,
            DisplayMode::Miles => 1.0 / FEET_PER_MILE,
            DisplayMode::Kilometers => KILOMETERS_PER_FOOT,
            DisplayMode::Meters => METERS_PER_FOOT,
        }
    }

    /// Multiplier from ft/s to this mode's speed unit
    pub fn speed_factor(self) -> f64 {
        match self {
            DisplayMode::Feet => 1.0,
            DisplayMode::Miles => 1.0 / FEET_PER_MILE * SECONDS_PER_HOUR,
            DisplayMode::Kilometers => KILOMETERS_PER_FOOT * SECONDS_PER_HOUR,
            DisplayMode::Meters => METERS_PER_FOOT,
        }
    }

    /// Convert a speed in ft/s
    pub fn convert_speed(self, speed_fps: f64) -> f64 {
        speed_fps * self.speed_factor()
    }

    /// Convert a distance in feet
    pub fn convert_distance(self, distance_ft: f64) -> f64 {
        distance_ft * self.distance_factor()
    }

    /// Decode a stored discriminant
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(DisplayMode::Feet),
            1 => Some(DisplayMode::Miles),
            2 => Some(DisplayMode::Kilometers),
            3 => Some(DisplayMode::Meters),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(DisplayMode::Feet.next(), DisplayMode::Miles);
        assert_eq!(DisplayMode::Miles.next(), DisplayMode::Kilometers);
        assert_eq!(DisplayMode::Kilometers.next(), DisplayMode::Meters);
        assert_eq!(DisplayMode::Meters.next(), DisplayMode::Feet);
    }

    #[test]
    fn test_four_steps_return_home() {
        for mode in DisplayMode::ALL {
            assert_eq!(mode.next().next().next().next(), mode);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(DisplayMode::Feet.label(), "ft/sec");
        assert_eq!(DisplayMode::Miles.label(), "mi/hr");
        assert_eq!(DisplayMode::Kilometers.label(), "km/hr");
        assert_eq!(DisplayMode::Meters.label(), "m/sec");
    }

    #[test]
    fn test_feet_is_identity() {
        assert_eq!(DisplayMode::Feet.convert_speed(12.5), 12.5);
        assert_eq!(DisplayMode::Feet.convert_distance(12.5), 12.5);
    }

    #[test]
    fn test_known_conversions() {
        // 88 ft/s is 60 mph
        assert!((DisplayMode::Miles.convert_speed(88.0) - 60.0).abs() < 1e-9);
        assert!((DisplayMode::Miles.convert_distance(5280.0) - 1.0).abs() < 1e-12);

        // 1 ft = 0.3048 m
        assert!((DisplayMode::Meters.convert_distance(1.0) - 0.3048).abs() < 1e-12);
        assert!((DisplayMode::Meters.convert_speed(10.0) - 3.048).abs() < 1e-12);

        // 1 ft/s = 1.09728 km/h
        assert!((DisplayMode::Kilometers.convert_speed(1.0) - 1.09728).abs() < 1e-12);
        assert!((DisplayMode::Kilometers.convert_distance(1000.0) - 0.3048).abs() < 1e-12);
    }

    #[test]
    fn test_discriminant_roundtrip() {
        for mode in DisplayMode::ALL {
            assert_eq!(DisplayMode::from_u8(mode as u8), Some(mode));
        }
        assert_eq!(DisplayMode::from_u8(4), None);
    }
}
