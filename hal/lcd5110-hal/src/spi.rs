//! SPI bus abstractions
//!
//! The display is write-only, so the bus capability is deliberately narrow:
//! open a channel at a clock rate, push bytes, drop the handle to close.

/// An open, write-only SPI channel
pub trait SpiBus {
    /// Error type for transfer failures
    type Error;

    /// Write a block of bytes, blocking until the transport accepts them
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Factory for SPI channels
///
/// Splitting `open` from the bus handle lets the driver own the handle for
/// exactly its ready lifetime and release it on shutdown by dropping it.
pub trait SpiHost {
    /// Error type shared with the bus this host opens
    type Error;

    /// The bus handle type produced by `open`
    type Bus: SpiBus<Error = Self::Error>;

    /// Open the given channel at the given clock rate
    fn open(&mut self, channel: u8, clock_hz: u32) -> Result<Self::Bus, Self::Error>;
}
