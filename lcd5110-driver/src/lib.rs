//! Driver for the Nokia 5110 LCD (PCD8544 controller)
//!
//! An 84x48 monochrome dot-matrix display driven over SPI plus two control
//! lines (D/C and reset) and a backlight line. The controller is operated in
//! horizontal addressing mode: display memory is 6 "pages" of 84 bytes, each
//! byte holding 8 vertically stacked pixels with bit 0 topmost, and every
//! data write auto-increments the address pointer.
//!
//! The driver keeps a host-side shadow of the 504 bytes of display memory so
//! pixel reads and read-modify-write pixel updates never touch the hardware,
//! and it rotates its font data into the controller's column-major bit
//! layout once at initialization.
//!
//! Hardware access goes through the capability traits in `lcd5110-hal`;
//! see [`Pcd8544`] for the public drawing API.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod framebuffer;
pub mod pcd8544;

pub use pcd8544::{Config, Error, FontSize, Pcd8544, State};
