//! Character display trait for the 16x2 LCD

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A control or data pin could not be driven
    Pin,
    /// Cursor position lies outside the grid
    OutOfBounds,
}

/// Trait for character-cell displays
///
/// Only the four primitives the speedometer needs: init, clear, cursor
/// positioning and text output at the cursor.
pub trait CharDisplay {
    /// Initialize the display for a grid of `cols` x `rows` cells
    fn init(&mut self, cols: u8, rows: u8) -> Result<(), DisplayError>;

    /// Clear every cell and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to `col`, `row` (both zero-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write ASCII text at the cursor, advancing it
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError>;
}
