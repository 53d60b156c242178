//! Screen rendering
//!
//! Lays speed and distance out on the 16x2 character grid:
//!
//! ```text
//! 0123456789012345
//! 1.45       mi/hr
//! 0.00       total
//! ```
//!
//! Values start at column 0; the unit label and the word "total" are
//! right-aligned. The whole screen is cleared before every redraw. Values
//! wider than the space left of the label are not truncated.

pub mod frame;

pub use frame::FrameBuffer;

use core::fmt::Write;

use heapless::String;

use crate::odometer::Measurement;
use crate::traits::{CharDisplay, DisplayError};
use crate::units::DisplayMode;

/// Display width in characters
pub const DISPLAY_COLS: u8 = 16;

/// Display height in characters
pub const DISPLAY_ROWS: u8 = 2;

/// Suffix shown after the distance
pub const TOTAL_LABEL: &str = "total";

/// Formatted number buffer, wider than a row so overflow reaches the display
pub type ValueText = String<24>;

/// Format `value` with a fixed number of decimal places
pub fn format_value(value: f64, decimals: u8) -> ValueText {
    let mut text = ValueText::new();
    // Overlong values keep whatever fitted in the buffer
    let _ = write!(text, "{:.*}", decimals as usize, value);
    text
}

/// Column at which a right-aligned `text` starts
fn right_aligned(text: &str) -> u8 {
    DISPLAY_COLS.saturating_sub(text.len() as u8)
}

/// Redraw speed and distance in the given unit system
pub fn render<D: CharDisplay>(
    display: &mut D,
    mode: DisplayMode,
    measurement: &Measurement,
    decimals: u8,
) -> Result<(), DisplayError> {
    let speed = format_value(mode.convert_speed(measurement.speed_fps), decimals);
    let distance = format_value(mode.convert_distance(measurement.distance_ft), decimals);
    let label = mode.label();

    display.clear()?;

    display.set_cursor(0, 0)?;
    display.write_str(&speed)?;
    display.set_cursor(right_aligned(label), 0)?;
    display.write_str(label)?;

    display.set_cursor(0, 1)?;
    display.write_str(&distance)?;
    display.set_cursor(right_aligned(TOTAL_LABEL), 1)?;
    display.write_str(TOTAL_LABEL)
}

/// Render the power-on screen shown until the first redraw
pub fn render_splash<D: CharDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear()?;
    display.set_cursor(3, 0)?;
    display.write_str("VELOMETER")?;
    display.set_cursor(2, 1)?;
    display.write_str("spin wheel...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.4541, 2).as_str(), "1.45");
        assert_eq!(format_value(0.0, 2).as_str(), "0.00");
        assert_eq!(format_value(12.0, 0).as_str(), "12");
        assert_eq!(format_value(f64::INFINITY, 2).as_str(), "inf");
    }

    #[test]
    fn test_feet_layout() {
        let mut frame = FrameBuffer::new();
        let measurement = Measurement {
            speed_fps: 4.25,
            distance_ft: 130.5,
        };

        render(&mut frame, DisplayMode::Feet, &measurement, 2).unwrap();

        assert_eq!(frame.row(0), "4.25      ft/sec");
        assert_eq!(frame.row(1), "130.50     total");
    }

    #[test]
    fn test_label_column_depends_on_label() {
        let mut frame = FrameBuffer::new();
        render(&mut frame, DisplayMode::Meters, &Measurement::default(), 2).unwrap();
        assert_eq!(frame.row(0), "0.00       m/sec");

        render(&mut frame, DisplayMode::Kilometers, &Measurement::default(), 2).unwrap();
        assert_eq!(frame.row(0), "0.00       km/hr");
    }

    #[test]
    fn test_redraw_clears_previous_content() {
        let mut frame = FrameBuffer::new();
        let wide = Measurement {
            speed_fps: 123456.0,
            distance_ft: 0.0,
        };
        render(&mut frame, DisplayMode::Feet, &wide, 2).unwrap();
        render(&mut frame, DisplayMode::Miles, &Measurement::default(), 2).unwrap();

        assert_eq!(frame.row(0), "0.00       mi/hr");
        assert_eq!(frame.row(1), "0.00       total");
    }

    #[test]
    fn test_wide_value_is_overwritten_by_label() {
        let mut frame = FrameBuffer::new();
        let wide = Measurement {
            speed_fps: 1234567890.0,
            distance_ft: 0.0,
        };
        render(&mut frame, DisplayMode::Feet, &wide, 2).unwrap();
        assert_eq!(frame.row(0), "1234567890ft/sec");
    }

    #[test]
    fn test_splash() {
        let mut frame = FrameBuffer::new();
        render_splash(&mut frame).unwrap();
        assert_eq!(frame.row(0), "   VELOMETER    ");
        assert_eq!(frame.row(1), "  spin wheel... ");
    }
}
