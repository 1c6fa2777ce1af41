//! Blocking delay abstraction
//!
//! Only millisecond granularity is needed (the reset pulse timing).

/// Blocking millisecond delay
pub trait Delay {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Adapter for `embedded-hal` delay implementations
///
/// Wraps any [`embedded_hal::delay::DelayNs`] so platform delay providers
/// can be used without a hand-written impl.
pub struct HalDelay<T>(pub T);

impl<T: embedded_hal::delay::DelayNs> Delay for HalDelay<T> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
