//! Monotonic time source

/// Millisecond timing source shared by rotation timing and debounce
pub trait Clock {
    /// Milliseconds since boot, never decreasing
    fn now_ms(&self) -> u64;
}
