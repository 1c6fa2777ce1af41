//! Shadow framebuffer
//!
//! Host-side mirror of the controller's display memory. The controller
//! cannot be read back over the write-only bus, so this copy is the single
//! source of truth for pixel reads and for deciding whether a pixel write
//! actually changes anything.

/// Display width in pixels
pub const WIDTH: usize = 84;

/// Display height in pixels
pub const HEIGHT: usize = 48;

/// Number of 8-pixel-tall pages
pub const PAGES: usize = HEIGHT / 8;

/// Total bytes of display memory
pub const BUFFER_LEN: usize = WIDTH * PAGES;

/// Error for block writes that would run past the end of display memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

/// Shadow copy of the controller's display memory
///
/// Byte at `page * 84 + x` holds the 8 pixels of column `x` in page `page`,
/// bit 0 topmost. The buffer always reflects the last value sent to the
/// corresponding controller address.
pub struct Framebuffer {
    bytes: [u8; BUFFER_LEN],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a zeroed framebuffer (all pixels off)
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_LEN],
        }
    }

    /// Byte index holding pixel `(x, y)`, or `None` off the grid
    pub const fn byte_index(x: u8, y: u8) -> Option<usize> {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            Some((y as usize >> 3) * WIDTH + x as usize)
        } else {
            None
        }
    }

    /// The byte at a display memory address
    ///
    /// `index` must be below [`BUFFER_LEN`]; use [`Framebuffer::byte_index`]
    /// to compute it.
    pub fn byte_at(&self, index: usize) -> u8 {
        self.bytes[index]
    }

    /// Copy `data` into display memory starting at `offset`
    pub fn write_block(&mut self, offset: usize, data: &[u8]) -> Result<(), OutOfRange> {
        let end = offset.checked_add(data.len()).ok_or(OutOfRange)?;
        if end > BUFFER_LEN {
            return Err(OutOfRange);
        }
        self.bytes[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Read pixel `(x, y)`
    ///
    /// Off-grid coordinates read as off so bulk readers need no bounds
    /// checks of their own.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        match Self::byte_index(x, y) {
            Some(index) => self.bytes[index] & (1 << (y & 7)) != 0,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_clear() {
        let fb = Framebuffer::new();
        for x in 0..WIDTH as u8 {
            for y in 0..HEIGHT as u8 {
                assert!(!fb.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_byte_index_corners() {
        assert_eq!(Framebuffer::byte_index(0, 0), Some(0));
        assert_eq!(Framebuffer::byte_index(83, 7), Some(83));
        assert_eq!(Framebuffer::byte_index(0, 8), Some(84));
        assert_eq!(Framebuffer::byte_index(83, 47), Some(BUFFER_LEN - 1));
        assert_eq!(Framebuffer::byte_index(84, 0), None);
        assert_eq!(Framebuffer::byte_index(0, 48), None);
    }

    #[test]
    fn test_write_block_and_read_back() {
        let mut fb = Framebuffer::new();
        fb.write_block(84, &[0x01, 0x80]).unwrap();
        // Bit 0 is the top row of page 1
        assert!(fb.pixel(0, 8));
        assert!(!fb.pixel(0, 9));
        assert!(fb.pixel(1, 15));
    }

    #[test]
    fn test_write_block_bounds() {
        let mut fb = Framebuffer::new();
        assert_eq!(fb.write_block(BUFFER_LEN - 1, &[0xFF]), Ok(()));
        assert_eq!(fb.write_block(BUFFER_LEN - 1, &[0xFF, 0xFF]), Err(OutOfRange));
        assert_eq!(fb.write_block(BUFFER_LEN, &[0xFF]), Err(OutOfRange));
        assert_eq!(fb.write_block(usize::MAX, &[0xFF]), Err(OutOfRange));
    }

    #[test]
    fn test_off_grid_pixels_read_off() {
        let mut fb = Framebuffer::new();
        fb.write_block(0, &[0xFF; BUFFER_LEN]).unwrap();
        assert!(!fb.pixel(84, 0));
        assert!(!fb.pixel(0, 48));
        assert!(!fb.pixel(255, 255));
    }
}
