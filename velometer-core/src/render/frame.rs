//! In-memory character grid
//!
//! A [`CharDisplay`] backed by a 16x2 byte array. Used to preview screens
//! and to check layouts without hardware.

use crate::traits::{CharDisplay, DisplayError};

use super::{DISPLAY_COLS, DISPLAY_ROWS};

const COLS: usize = DISPLAY_COLS as usize;
const ROWS: usize = DISPLAY_ROWS as usize;

/// 16x2 character frame buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: [[u8; COLS]; ROWS],
    col: u8,
    row: u8,
}

impl FrameBuffer {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            col: 0,
            row: 0,
        }
    }

    /// Text of one row (all 16 cells, blank-padded)
    pub fn row(&self, row: u8) -> &str {
        match self.cells.get(row as usize) {
            // Cells only ever hold ASCII
            Some(cells) => core::str::from_utf8(cells).unwrap_or(""),
            None => "",
        }
    }

    /// Current cursor position as (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        (self.col, self.row)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for FrameBuffer {
    fn init(&mut self, cols: u8, rows: u8) -> Result<(), DisplayError> {
        if cols > DISPLAY_COLS || rows > DISPLAY_ROWS {
            return Err(DisplayError::OutOfBounds);
        }
        self.clear()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.cells = [[b' '; COLS]; ROWS];
        self.col = 0;
        self.row = 0;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= DISPLAY_COLS || row >= DISPLAY_ROWS {
            return Err(DisplayError::OutOfBounds);
        }
        self.col = col;
        self.row = row;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for ch in text.chars() {
            // Characters past the last column fall off the visible area
            if let Some(cell) = self.cells[self.row as usize].get_mut(self.col as usize) {
                *cell = if ch.is_ascii() { ch as u8 } else { b'?' };
            }
            self.col = self.col.saturating_add(1);
        }
        Ok(())
    }
}
