//! Hardware abstraction traits for the lcd5110 driver
//!
//! The driver core never touches hardware directly. Everything it needs is
//! expressed as three narrow capabilities that the surrounding application
//! (or a test harness) implements:
//!
//! - [`spi::SpiHost`] / [`spi::SpiBus`] - open a serial channel and push
//!   bytes through it
//! - [`gpio::LineDriver`] - drive the D/C, reset and backlight control lines
//! - [`delay::Delay`] - blocking millisecond delays for the reset pulse
//!
//! [`pins`] provides the board-level translation from header pin numbers to
//! native GPIO line identifiers.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod pins;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use gpio::{LineDriver, LineId};
pub use pins::{map_header_pin, PinError};
pub use spi::{SpiBus, SpiHost};
