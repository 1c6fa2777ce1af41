//! GPIO control-line abstractions
//!
//! The display needs three output lines (D/C, reset, backlight). They are
//! addressed by native line identifier rather than by owned pin objects so
//! that one driver value can manage all of them.

/// Native GPIO line identifier
///
/// Obtained from [`crate::pins::map_header_pin`], or constructed directly
/// when the caller already knows the native numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineId(u8);

impl LineId {
    /// Create a line identifier from a native line number
    pub const fn new(line: u8) -> Self {
        Self(line)
    }

    /// The native line number
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Driver for a bank of digital output lines
///
/// Implementations handle the actual register or character-device access
/// for the specific platform.
pub trait LineDriver {
    /// Configure the line as an output
    fn configure_output(&mut self, line: LineId);

    /// Drive the line high (true) or low (false)
    fn set_level(&mut self, line: LineId, high: bool);
}
