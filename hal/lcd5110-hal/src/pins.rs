//! Header pin number translation
//!
//! Callers identify control lines by their physical position on the 40-pin
//! header. This module maps those positions to native GPIO line numbers and
//! rejects power, ground and otherwise unusable positions with a typed error
//! before any hardware is touched.

use crate::gpio::LineId;

/// Error when translating a header pin number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Header position beyond the end of the header
    OutOfRange,
    /// Power, ground or otherwise reserved position
    Unusable,
}

/// Header position to native GPIO line, `None` for unusable positions.
/// Index 0 is unused; positions count from 1 as printed on the board.
const HEADER_PIN_MAP: [Option<u8>; 41] = [
    None,
    None,
    None,
    Some(8),
    None,
    Some(9),
    None,
    Some(7),
    Some(15),
    None,
    Some(16),
    Some(0),
    Some(1),
    Some(2),
    None,
    Some(3),
    Some(4),
    None,
    Some(5),
    Some(12),
    None,
    Some(13),
    Some(6),
    Some(14),
    Some(10),
    None,
    Some(11),
    Some(30),
    Some(31),
    Some(21),
    None,
    Some(22),
    Some(26),
    Some(23),
    None,
    Some(24),
    Some(27),
    Some(25),
    Some(28),
    None,
    Some(29),
];

/// Translate a physical header position to a native GPIO line
pub fn map_header_pin(header: u8) -> Result<LineId, PinError> {
    let entry = HEADER_PIN_MAP
        .get(header as usize)
        .ok_or(PinError::OutOfRange)?;
    entry.map(LineId::new).ok_or(PinError::Unusable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_positions() {
        assert_eq!(map_header_pin(3), Ok(LineId::new(8)));
        assert_eq!(map_header_pin(11), Ok(LineId::new(0)));
        assert_eq!(map_header_pin(40), Ok(LineId::new(29)));
    }

    #[test]
    fn test_power_and_ground_positions_rejected() {
        for header in [1, 2, 4, 6, 9, 14, 17, 20, 25, 30, 34, 39] {
            assert_eq!(map_header_pin(header), Err(PinError::Unusable));
        }
    }

    #[test]
    fn test_positions_past_header_end_rejected() {
        assert_eq!(map_header_pin(41), Err(PinError::OutOfRange));
        assert_eq!(map_header_pin(255), Err(PinError::OutOfRange));
    }
}
