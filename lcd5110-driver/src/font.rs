//! Font preprocessing
//!
//! Glyph source data is row-major: one byte per horizontal pixel row. The
//! rotators expect bit 7 leftmost, so that rotated byte 0 lands on the
//! leftmost display column. The embedded artwork table uses the opposite
//! convention (bit 0 leftmost) and has each row bit-reversed while the
//! tables are built. The controller's horizontal addressing mode wants
//! column-major bytes, bit 0 topmost, so every glyph is rotated once into
//! that layout.
//!
//! [`FontTable::build`] produces the rotated tables as an immutable value.
//! The original C driver rotated a shared font blob in place, which made a
//! second rotation silently corrupt every glyph; building an owned table
//! from constant source data removes that failure mode entirely.
//!
//! Two faces are provided:
//!
//! - small: 8x8, 256 glyph codes, 8 bytes per rotated glyph. Codes above
//!   0x7F have no source artwork and render blank.
//! - large: 16x24 digits-and-text face in a 16x32 cell, 128 glyph codes,
//!   64 bytes per rotated glyph. Synthesized from the small face by
//!   doubling columns and tripling rows; only the first 3 of the 4
//!   8-row bands are ever drawn.

/// Bytes per rotated small glyph
pub const SMALL_GLYPH_LEN: usize = 8;

/// Number of small glyph codes
pub const SMALL_GLYPHS: usize = 256;

/// Bytes per rotated large glyph (4 bands of 16)
pub const LARGE_GLYPH_LEN: usize = 64;

/// Number of large glyph codes
pub const LARGE_GLYPHS: usize = 128;

/// Bytes per large glyph band (8 left-half columns, then 8 right-half)
pub const LARGE_BAND_LEN: usize = 16;

/// Rotated glyph tables, built once per session and never mutated
pub struct FontTable {
    small: [[u8; SMALL_GLYPH_LEN]; SMALL_GLYPHS],
    large: [[u8; LARGE_GLYPH_LEN]; LARGE_GLYPHS],
}

impl FontTable {
    /// Rotate both faces from their source data
    pub fn build() -> Self {
        let mut small = [[0u8; SMALL_GLYPH_LEN]; SMALL_GLYPHS];
        let mut large = [[0u8; LARGE_GLYPH_LEN]; LARGE_GLYPHS];

        for (code, glyph) in small.iter_mut().enumerate() {
            *glyph = rotate_small(&source_glyph(code));
        }
        for (code, glyph) in large.iter_mut().enumerate() {
            *glyph = rotate_large(&large_cell(&source_glyph(code)));
        }

        Self { small, large }
    }

    /// Rotated small glyph for a character code
    pub fn small(&self, code: u8) -> &[u8; SMALL_GLYPH_LEN] {
        &self.small[code as usize]
    }

    /// Rotated large glyph for a character code, `None` above 0x7F
    pub fn large(&self, code: u8) -> Option<&[u8; LARGE_GLYPH_LEN]> {
        self.large.get(code as usize)
    }
}

/// Source rows for a glyph code, in the bit-7-leftmost orientation the
/// rotators expect; codes without artwork are blank
fn source_glyph(code: usize) -> [u8; 8] {
    let mut rows = match GLYPHS_8X8.get(code) {
        Some(rows) => *rows,
        None => [0; 8],
    };
    for row in &mut rows {
        *row = row.reverse_bits();
    }
    rows
}

/// Rotate one 8x8 glyph into column-major bytes
///
/// Output byte `7 - y` holds the column at source bit `y`; its bit `b` is
/// source row `b`, so bit 0 ends up as the topmost pixel. With rows stored
/// bit 7 leftmost this keeps byte 0 on the leftmost display column.
fn rotate_small(rows: &[u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    for y in 0..8 {
        let mut column = 0u8;
        for (x, row) in rows.iter().enumerate() {
            if row & (1 << y) != 0 {
                column |= 1 << x;
            }
        }
        out[7 - y] = column;
    }
    out
}

/// Expand an 8x8 glyph into a 16x32 source cell
///
/// Columns are doubled and rows tripled, giving 16x24 of artwork
/// top-aligned in the cell; rows 24..32 stay blank. Each cell row is two
/// bytes, even byte holding the left 8 columns. Rows come in bit-7-leftmost,
/// so after doubling the left half is the high byte.
fn large_cell(rows: &[u8; 8]) -> [u8; LARGE_GLYPH_LEN] {
    let mut cell = [0u8; LARGE_GLYPH_LEN];
    for (row, &bits) in rows.iter().enumerate() {
        let wide = double_bits(bits);
        for rep in 0..3 {
            let line = row * 3 + rep;
            cell[line * 2] = (wide >> 8) as u8;
            cell[line * 2 + 1] = wide as u8;
        }
    }
    cell
}

/// Duplicate each bit of `row` into an adjacent pair
const fn double_bits(row: u8) -> u16 {
    let mut out = 0u16;
    let mut bit = 0;
    while bit < 8 {
        if row & (1 << bit) != 0 {
            out |= 0b11 << (bit * 2);
        }
        bit += 1;
    }
    out
}

/// Rotate one 16x32 source cell into the controller layout
///
/// The cell is processed as 4 bands of 8 rows. Within a band the left-half
/// column for source column `y` lands at band offset `7 - y` and the
/// right-half column at `15 - y`, bit `b` being row `b` of the band.
fn rotate_large(cell: &[u8; LARGE_GLYPH_LEN]) -> [u8; LARGE_GLYPH_LEN] {
    let mut out = [0u8; LARGE_GLYPH_LEN];
    for band in 0..4 {
        let rows = &cell[band * LARGE_BAND_LEN..(band + 1) * LARGE_BAND_LEN];
        for y in 0..8 {
            let mut left = 0u8;
            let mut right = 0u8;
            for x in 0..8 {
                if rows[x * 2] & (1 << y) != 0 {
                    left |= 1 << x;
                }
                if rows[x * 2 + 1] & (1 << y) != 0 {
                    right |= 1 << x;
                }
            }
            out[band * LARGE_BAND_LEN + 7 - y] = left;
            out[band * LARGE_BAND_LEN + 15 - y] = right;
        }
    }
    out
}

/// 8x8 source face, codes 0x00-0x7F (public-domain ASCII bitmap face).
/// Row-major, bit 0 leftmost. Control codes are blank.
static GLYPHS_8X8: [[u8; 8]; 128] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // '!'
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // '#'
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // '$'
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // '%'
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // '&'
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // '('
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // ')'
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // '*'
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ','
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // '/'
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // '0'
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // '1'
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // '2'
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // '3'
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // '4'
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // '5'
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // '6'
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // '7'
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // '8'
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ';'
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // '<'
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // '='
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // '>'
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // '?'
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // '@'
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // 'A'
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // 'B'
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // 'C'
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // 'D'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // 'E'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // 'F'
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // 'G'
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // 'H'
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'I'
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // 'J'
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // 'K'
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // 'L'
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // 'M'
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // 'N'
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // 'O'
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // 'P'
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // 'Q'
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // 'R'
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // 'S'
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'T'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // 'U'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'V'
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // 'W'
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // 'X'
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // 'Y'
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // 'Z'
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // '['
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // '\\'
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ']'
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // '_'
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'a'
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // 'b'
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // 'c'
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // 'd'
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'e'
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // 'f'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'g'
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // 'h'
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'i'
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // 'j'
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // 'k'
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'l'
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // 'm'
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // 'n'
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'o'
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // 'p'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // 'q'
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // 'r'
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // 's'
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // 't'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'u'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'v'
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // 'w'
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // 'x'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'y'
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // 'z'
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // '{'
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // '|'
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // '}'
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '~'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7F
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Rotated small 'A', worked out by hand from the source rows
    const SMALL_A: [u8; 8] = [0x7C, 0x7E, 0x13, 0x13, 0x7E, 0x7C, 0x00, 0x00];

    /// Rotated large 'A': 4 bands, left-half columns then right-half
    #[rustfmt::skip]
    const LARGE_A: [u8; 64] = [
        0xC0, 0xC0, 0xF8, 0xF8, 0x3F, 0x3F, 0x3F, 0x3F,
        0xF8, 0xF8, 0xF8, 0xC0, 0x00, 0x00, 0x00, 0x00,
        0xFF, 0xFF, 0xFF, 0xFF, 0x70, 0x70, 0x70, 0x70,
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
        0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00,
        0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn test_small_reference_glyphs() {
        let table = FontTable::build();
        assert_eq!(table.small(0x41), &SMALL_A);
        assert_eq!(table.small(0x00), &[0u8; 8]);
    }

    #[test]
    fn test_large_reference_glyphs() {
        let table = FontTable::build();
        assert_eq!(table.large(0x41).unwrap(), &LARGE_A);
        assert_eq!(table.large(0x00).unwrap(), &[0u8; 64]);
    }

    #[test]
    fn test_large_lookup_rejects_high_codes() {
        let table = FontTable::build();
        assert!(table.large(0x7F).is_some());
        assert!(table.large(0x80).is_none());
        assert!(table.large(0xFF).is_none());
    }

    #[test]
    fn test_small_codes_without_artwork_are_blank() {
        let table = FontTable::build();
        assert_eq!(table.small(0x80), &[0u8; 8]);
        assert_eq!(table.small(0xFF), &[0u8; 8]);
    }

    #[test]
    fn test_rotate_small_moves_rows_to_columns() {
        // A single source row becomes one set bit in every output column
        let rotated = rotate_small(&[0xFF, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(rotated, [0x01; 8]);

        // Source bit 0 is the rightmost column and lands in the last byte
        let rotated = rotate_small(&[0x01; 8]);
        let mut expected = [0u8; 8];
        expected[7] = 0xFF;
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_rotation_keeps_left_right_orientation() {
        let table = FontTable::build();

        // The vertical stroke of 'L' sits near the left edge
        let glyph = table.small(b'L');
        let left: u32 = glyph[..4].iter().map(|b| b.count_ones()).sum();
        let right: u32 = glyph[4..].iter().map(|b| b.count_ones()).sum();
        assert!(left > right, "'L' rendered mirrored: left={left} right={right}");

        // '/' rises to the right: top row lit on the right, not the left
        let slash = table.small(b'/');
        assert_eq!(slash[0] & 0x01, 0);
        assert_ne!(slash[5] & 0x01, 0);
        assert_ne!(slash[0] & 0x40, 0);

        // Same orientation check for the synthesized large face
        let glyph = table.large(b'L').unwrap();
        let mut left = 0u32;
        let mut right = 0u32;
        for band in glyph.chunks(LARGE_BAND_LEN) {
            left += band[..8].iter().map(|b| b.count_ones()).sum::<u32>();
            right += band[8..].iter().map(|b| b.count_ones()).sum::<u32>();
        }
        assert!(left > right, "large 'L' rendered mirrored");
    }

    #[test]
    fn test_double_bits() {
        assert_eq!(double_bits(0x00), 0x0000);
        assert_eq!(double_bits(0x01), 0x0003);
        assert_eq!(double_bits(0x80), 0xC000);
        assert_eq!(double_bits(0xFF), 0xFFFF);
        assert_eq!(double_bits(0x0C), 0x00F0);
    }

    #[test]
    fn test_large_cell_keeps_bottom_rows_blank() {
        let cell = large_cell(&[0xFF; 8]);
        // 24 rows of artwork, 8 blank rows
        assert!(cell[..48].iter().all(|&b| b == 0xFF));
        assert!(cell[48..].iter().all(|&b| b == 0x00));
    }
}
