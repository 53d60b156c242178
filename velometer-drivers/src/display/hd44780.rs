//! HD44780 character LCD driver
//!
//! Drives an HD44780-compatible module over six GPIOs in 4-bit mode
//! (RS, E, D4-D7; R/W tied to ground). The busy flag cannot be read with
//! R/W grounded, so every transfer waits out the datasheet execution time.
//!
//! # Wiring
//!
//! ```text
//! RS  -- register select (0 = command, 1 = data)
//! E   -- enable strobe, latched on the falling edge
//! D4..D7 -- upper data nibble
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use velometer_core::traits::{CharDisplay, DisplayError};

// Commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM_ADDR: u8 = 0x80;

// Flags
const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const FUNCTION_2_LINE: u8 = 0x08;

/// DDRAM start address of each row
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Largest supported geometry (20x4 modules)
const MAX_COLS: u8 = 20;
const MAX_ROWS: u8 = 4;

// Timing (microseconds)
const POWER_ON_DELAY_US: u32 = 50_000;
const INIT_NIBBLE_DELAY_US: u32 = 4_500;
const ENABLE_PULSE_US: u32 = 1;
const COMMAND_DELAY_US: u32 = 50;
const CLEAR_DELAY_US: u32 = 2_000;

/// Pins connecting the module
pub struct Hd44780Pins<P> {
    /// Register select
    pub rs: P,
    /// Enable strobe
    pub en: P,
    /// D4, D5, D6, D7
    pub data: [P; 4],
}

/// HD44780 driver in 4-bit mode
pub struct Hd44780<P, D> {
    pins: Hd44780Pins<P>,
    delay: D,
    cols: u8,
    rows: u8,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver; call [`CharDisplay::init`] before use
    pub fn new(pins: Hd44780Pins<P>, delay: D) -> Self {
        Self {
            pins,
            delay,
            cols: 16,
            rows: 2,
        }
    }

    /// Configured geometry as (cols, rows)
    pub fn geometry(&self) -> (u8, u8) {
        (self.cols, self.rows)
    }

    fn set_pin(pin: &mut P, high: bool) -> Result<(), DisplayError> {
        let result = if high { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| DisplayError::Pin)
    }

    /// Put a nibble on D4-D7 and strobe E
    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.pins.data.iter_mut().enumerate() {
            Self::set_pin(pin, nibble & (1 << bit) != 0)?;
        }

        Self::set_pin(&mut self.pins.en, true)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        Self::set_pin(&mut self.pins.en, false)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    /// Send a full byte as two nibbles, high first
    fn write_byte(&mut self, byte: u8, data: bool) -> Result<(), DisplayError> {
        Self::set_pin(&mut self.pins.rs, data)?;
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write_byte(cmd, false)
    }
}

impl<P: OutputPin, D: DelayNs> CharDisplay for Hd44780<P, D> {
    fn init(&mut self, cols: u8, rows: u8) -> Result<(), DisplayError> {
        if cols == 0 || rows == 0 || cols > MAX_COLS || rows > MAX_ROWS {
            return Err(DisplayError::OutOfBounds);
        }
        self.cols = cols;
        self.rows = rows;

        self.delay.delay_us(POWER_ON_DELAY_US);
        Self::set_pin(&mut self.pins.rs, false)?;
        Self::set_pin(&mut self.pins.en, false)?;

        // Reset by instruction: three 8-bit function sets, then switch to 4-bit
        for _ in 0..3 {
            self.write_nibble(0x03)?;
            self.delay.delay_us(INIT_NIBBLE_DELAY_US);
        }
        self.write_nibble(0x02)?;

        let lines = if rows > 1 { FUNCTION_2_LINE } else { 0 };
        self.command(CMD_FUNCTION_SET | lines)?;
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= self.cols || row >= self.rows {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(CMD_SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for ch in text.chars() {
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.write_byte(byte, true)?;
        }
        Ok(())
    }
}
