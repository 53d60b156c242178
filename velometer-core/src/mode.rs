//! Display-mode selection
//!
//! The mode button cycles [`DisplayMode`]. Presses closer together than the
//! debounce window are contact bounce and are dropped.
//!
//! The current mode is shared between the button handler (sole writer) and
//! the renderer, which may run at any point relative to it. It is kept in a
//! single-byte atomic so no reader ever sees a torn value. Only load and
//! store are used, which Cortex-M0 supports natively.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::units::DisplayMode;

/// Display mode shared between the button handler and the renderer
#[derive(Debug)]
pub struct SharedMode(AtomicU8);

impl SharedMode {
    /// Create with an initial mode
    pub const fn new(mode: DisplayMode) -> Self {
        Self(AtomicU8::new(mode as u8))
    }

    /// Current mode
    pub fn load(&self) -> DisplayMode {
        // Only valid discriminants are ever stored
        DisplayMode::from_u8(self.0.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Replace the mode
    pub fn store(&self, mode: DisplayMode) {
        self.0.store(mode as u8, Ordering::Release);
    }
}

impl Default for SharedMode {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

/// Debounced mode button handler
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeSelector {
    debounce_ms: u64,
    /// Last accepted press (ms since boot)
    last_accepted_ms: Option<u64>,
}

impl ModeSelector {
    /// Create a selector with the given debounce window
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            last_accepted_ms: None,
        }
    }

    /// Time of the last accepted press
    pub fn last_accepted_ms(&self) -> Option<u64> {
        self.last_accepted_ms
    }

    /// Handle a rising edge at `now_ms`
    ///
    /// Returns the new mode if the press was accepted, or `None` if it fell
    /// inside the debounce window. The first press is always accepted.
    pub fn press(&mut self, now_ms: u64, mode: &SharedMode) -> Option<DisplayMode> {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.debounce_ms {
                return None;
            }
        }

        let next = mode.load().next();
        mode.store(next);
        self.last_accepted_ms = Some(now_ms);
        Some(next)
    }
}
