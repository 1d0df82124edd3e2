//! Fixed-size bitmap fonts for the printable ASCII range.
//!
//! A glyph is `height` rows of `(width + 7) / 8` bytes each. The leftmost
//! pixel is the most significant bit of the first byte, and rows are stored
//! bottom row first.

/// First character with a glyph.
pub const FIRST_CHAR: u8 = b' ';
/// Last character with a glyph.
pub const LAST_CHAR: u8 = b'~';
/// Largest glyph width a [`Font`] may declare.
pub const MAX_GLYPH_WIDTH: u16 = 24;
/// Largest glyph height a [`Font`] may declare.
pub const MAX_GLYPH_HEIGHT: u16 = 24;

const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// A fixed-width font.
#[derive(Debug)]
pub struct Font {
    width: u16,
    height: u16,
    table: &'static [u8],
}

impl Font {
    /// # Panics
    ///
    /// If the glyph size is zero or exceeds [`MAX_GLYPH_WIDTH`] x
    /// [`MAX_GLYPH_HEIGHT`], or if `table` is too short for 95 glyphs.
    pub const fn new(width: u16, height: u16, table: &'static [u8]) -> Self {
        assert!(width > 0 && width <= MAX_GLYPH_WIDTH);
        assert!(height > 0 && height <= MAX_GLYPH_HEIGHT);
        let glyph_len = (width as usize).div_ceil(8) * height as usize;
        assert!(table.len() >= GLYPH_COUNT * glyph_len);
        Self {
            width,
            height,
            table,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        usize::from(self.width).div_ceil(8)
    }

    /// Whether pixel (`col`, `row`) of `glyph` is set, row 0 being the top.
    ///
    /// `glyph` is a slice returned by [`Font::glyph`].
    pub fn is_set(&self, glyph: &[u8], col: u16, row: u16) -> bool {
        let bytes_per_row = self.bytes_per_row();
        let start = usize::from(self.height - 1 - row) * bytes_per_row;
        let line = glyph[start..start + bytes_per_row]
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        let bit = 8 * bytes_per_row as u32 - 1 - u32::from(col);
        line & (1 << bit) != 0
    }

    /// Glyph bytes of `ch`, `None` outside the printable ASCII range.
    pub fn glyph(&self, ch: u8) -> Option<&'static [u8]> {
        if !(FIRST_CHAR..=LAST_CHAR).contains(&ch) {
            return None;
        }
        let len = self.bytes_per_row() * usize::from(self.height);
        let start = usize::from(ch - FIRST_CHAR) * len;
        self.table.get(start..start + len)
    }
}

/// 8x8 font.
pub static FONT8X8: Font = Font::new(8, 8, &FONT8X8_TABLE);
/// 8x16 font.
pub static FONT8X16: Font = Font::new(8, 16, &FONT8X16_TABLE);

#[rustfmt::skip]
static FONT8X8_TABLE: [u8; 95 * 8] = [
    // ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '!'
    0x00, 0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18,
    // '"'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x24, 0x6C, 0x6C,
    // '#'
    0x00, 0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C,
    // '$'
    0x00, 0x18, 0xFC, 0x06, 0x7C, 0xC0, 0x7E, 0x18,
    // '%'
    0x00, 0xC6, 0x66, 0x30, 0x18, 0xCC, 0xC6, 0x00,
    // '&'
    0x00, 0x76, 0xCC, 0xDC, 0x76, 0x38, 0x6C, 0x38,
    // "'"
    0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x18, 0x18,
    // '('
    0x00, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C,
    // ')'
    0x00, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30,
    // '*'
    0x00, 0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00,
    // '+'
    0x00, 0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00,
    // ','
    0x30, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '-'
    0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00,
    // '.'
    0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '/'
    0x00, 0x80, 0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06,
    // '0'
    0x00, 0x7C, 0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0x7C,
    // '1'
    0x00, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x38, 0x18,
    // '2'
    0x00, 0xFE, 0xC0, 0xC0, 0x7C, 0x06, 0xC6, 0x7C,
    // '3'
    0x00, 0xFC, 0x06, 0x06, 0x3C, 0x06, 0x06, 0xFC,
    // '4'
    0x00, 0x0C, 0x0C, 0xFE, 0xCC, 0xCC, 0xCC, 0x0C,
    // '5'
    0x00, 0x7C, 0xC6, 0x06, 0x06, 0xFC, 0xC0, 0xFE,
    // '6'
    0x00, 0x7C, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0x7C,
    // '7'
    0x00, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x06, 0xFE,
    // '8'
    0x00, 0x7C, 0xC6, 0xC6, 0x7C, 0xC6, 0xC6, 0x7C,
    // '9'
    0x00, 0x7C, 0x06, 0x06, 0x7E, 0xC6, 0xC6, 0x7C,
    // ':'
    0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00,
    // ';'
    0x30, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00,
    // '<'
    0x00, 0x0C, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0C,
    // '='
    0x00, 0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00,
    // '>'
    0x00, 0x30, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x30,
    // '?'
    0x00, 0x18, 0x00, 0x18, 0x18, 0x0C, 0x66, 0x3C,
    // '@'
    0x00, 0x7E, 0xC0, 0xDE, 0xDE, 0xDE, 0xC6, 0x7C,
    // 'A'
    0x00, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x6C, 0x38,
    // 'B'
    0x00, 0xFC, 0xC6, 0xC6, 0xFC, 0xC6, 0xC6, 0xFC,
    // 'C'
    0x00, 0x7C, 0xC6, 0xC0, 0xC0, 0xC0, 0xC6, 0x7C,
    // 'D'
    0x00, 0xF8, 0xCC, 0xC6, 0xC6, 0xC6, 0xCC, 0xF8,
    // 'E'
    0x00, 0xFE, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xFE,
    // 'F'
    0x00, 0xC0, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xFE,
    // 'G'
    0x00, 0x7C, 0xC6, 0xC6, 0xCE, 0xC0, 0xC6, 0x7C,
    // 'H'
    0x00, 0xC6, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0xC6,
    // 'I'
    0x00, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E,
    // 'J'
    0x00, 0x7C, 0xC6, 0xC6, 0x06, 0x06, 0x06, 0x06,
    // 'K'
    0x00, 0xC6, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0xC6,
    // 'L'
    0x00, 0xFE, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    // 'M'
    0x00, 0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6,
    // 'N'
    0x00, 0xC6, 0xC6, 0xCE, 0xDE, 0xF6, 0xE6, 0xC6,
    // 'O'
    0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C,
    // 'P'
    0x00, 0xC0, 0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xFC,
    // 'Q'
    0x06, 0x7C, 0xDE, 0xD6, 0xC6, 0xC6, 0xC6, 0x7C,
    // 'R'
    0x00, 0xC6, 0xCC, 0xD8, 0xFC, 0xC6, 0xC6, 0xFC,
    // 'S'
    0x00, 0x7C, 0xC6, 0x06, 0x7C, 0xC0, 0xC6, 0x7C,
    // 'T'
    0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E,
    // 'U'
    0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    // 'V'
    0x00, 0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0xC6,
    // 'W'
    0x00, 0xC6, 0xEE, 0xFE, 0xD6, 0xC6, 0xC6, 0xC6,
    // 'X'
    0x00, 0xC6, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0xC6,
    // 'Y'
    0x00, 0x18, 0x18, 0x18, 0x3C, 0x66, 0x66, 0x66,
    // 'Z'
    0x00, 0xFE, 0x60, 0x30, 0x18, 0x0C, 0x06, 0xFE,
    // '['
    0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C,
    // '\\'
    0x00, 0x02, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0,
    // ']'
    0x00, 0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C,
    // '^'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0x6C, 0x38, 0x10,
    // '_'
    0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '`'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x18, 0x18,
    // 'a'
    0x00, 0x7E, 0xC6, 0x7E, 0x06, 0x7C, 0x00, 0x00,
    // 'b'
    0x00, 0xFC, 0xC6, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0,
    // 'c'
    0x00, 0x7C, 0xC6, 0xC0, 0xC6, 0x7C, 0x00, 0x00,
    // 'd'
    0x00, 0x7E, 0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x06,
    // 'e'
    0x00, 0x7C, 0xC0, 0xFE, 0xC6, 0x7C, 0x00, 0x00,
    // 'f'
    0x00, 0x30, 0x30, 0x30, 0x7C, 0x30, 0x30, 0x1C,
    // 'g'
    0x7C, 0x06, 0x7E, 0xC6, 0xC6, 0x7E, 0x00, 0x00,
    // 'h'
    0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0,
    // 'i'
    0x00, 0x3C, 0x18, 0x18, 0x18, 0x38, 0x00, 0x18,
    // 'j'
    0x70, 0x18, 0x18, 0x18, 0x18, 0x38, 0x00, 0x18,
    // 'k'
    0x00, 0xC6, 0xCC, 0xF8, 0xCC, 0xC6, 0xC0, 0xC0,
    // 'l'
    0x00, 0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x38,
    // 'm'
    0x00, 0xC6, 0xC6, 0xD6, 0xFE, 0xEC, 0x00, 0x00,
    // 'n'
    0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xFC, 0x00, 0x00,
    // 'o'
    0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00,
    // 'p'
    0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xFC, 0x00, 0x00,
    // 'q'
    0x06, 0x06, 0x7E, 0xC6, 0xC6, 0x7E, 0x00, 0x00,
    // 'r'
    0x00, 0xC0, 0xC0, 0xC0, 0xE6, 0xDC, 0x00, 0x00,
    // 's'
    0x00, 0xFC, 0x06, 0x7C, 0xC0, 0x7E, 0x00, 0x00,
    // 't'
    0x00, 0x1C, 0x30, 0x30, 0x30, 0x7C, 0x30, 0x30,
    // 'u'
    0x00, 0x7E, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00,
    // 'v'
    0x00, 0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x00, 0x00,
    // 'w'
    0x00, 0x6C, 0xFE, 0xD6, 0xC6, 0xC6, 0x00, 0x00,
    // 'x'
    0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00, 0x00,
    // 'y'
    0x7C, 0x06, 0x7E, 0xC6, 0xC6, 0xC6, 0x00, 0x00,
    // 'z'
    0x00, 0xFE, 0x60, 0x38, 0x0C, 0xFE, 0x00, 0x00,
    // '{'
    0x00, 0x0E, 0x18, 0x18, 0x70, 0x18, 0x18, 0x0E,
    // '|'
    0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18,
    // '}'
    0x00, 0x70, 0x18, 0x18, 0x0E, 0x18, 0x18, 0x70,
    // '~'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x9C, 0x72,
];

#[rustfmt::skip]
static FONT8X16_TABLE: [u8; 95 * 16] = [
    // ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '!'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x18,
    0x18, 0x18, 0x3C, 0x3C, 0x3C, 0x18, 0x00, 0x00,
    // '"'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x24, 0x66, 0x66, 0x66, 0x00,
    // '#'
    0x00, 0x00, 0x00, 0x00, 0x6C, 0x6C, 0xFE, 0x6C,
    0x6C, 0x6C, 0xFE, 0x6C, 0x6C, 0x00, 0x00, 0x00,
    // '$'
    0x00, 0x00, 0x18, 0x18, 0x7C, 0xC6, 0x86, 0x06,
    0x06, 0x7C, 0xC0, 0xC2, 0xC6, 0x7C, 0x18, 0x18,
    // '%'
    0x00, 0x00, 0x00, 0x00, 0x86, 0xC6, 0x60, 0x30,
    0x18, 0x0C, 0xC6, 0xC2, 0x00, 0x00, 0x00, 0x00,
    // '&'
    0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC, 0xCC,
    0xDC, 0x76, 0x38, 0x6C, 0x6C, 0x38, 0x00, 0x00,
    // "'"
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x60, 0x30, 0x30, 0x30, 0x00,
    // '('
    0x00, 0x00, 0x00, 0x00, 0x0C, 0x18, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00, 0x00,
    // ')'
    0x00, 0x00, 0x00, 0x00, 0x30, 0x18, 0x0C, 0x0C,
    0x0C, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00, 0x00,
    // '*'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x3C,
    0xFF, 0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18,
    0x7E, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ','
    0x00, 0x00, 0x00, 0x30, 0x18, 0x18, 0x18, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '.'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '/'
    0x00, 0x00, 0x00, 0x00, 0x80, 0xC0, 0x60, 0x30,
    0x18, 0x0C, 0x06, 0x02, 0x00, 0x00, 0x00, 0x00,
    // '0'
    0x00, 0x00, 0x00, 0x00, 0x38, 0x6C, 0xC6, 0xC6,
    0xD6, 0xD6, 0xC6, 0xC6, 0x6C, 0x38, 0x00, 0x00,
    // '1'
    0x00, 0x00, 0x00, 0x00, 0x7E, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x78, 0x38, 0x18, 0x00, 0x00,
    // '2'
    0x00, 0x00, 0x00, 0x00, 0xFE, 0xC6, 0xC0, 0x60,
    0x30, 0x18, 0x0C, 0x06, 0xC6, 0x7C, 0x00, 0x00,
    // '3'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0x06, 0x06,
    0x06, 0x3C, 0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00,
    // '4'
    0x00, 0x00, 0x00, 0x00, 0x1E, 0x0C, 0x0C, 0x0C,
    0xFE, 0xCC, 0x6C, 0x3C, 0x1C, 0x0C, 0x00, 0x00,
    // '5'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0x06, 0x06,
    0x06, 0xFC, 0xC0, 0xC0, 0xC0, 0xFE, 0x00, 0x00,
    // '6'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6,
    0xC6, 0xFC, 0xC0, 0xC0, 0x60, 0x38, 0x00, 0x00,
    // '7'
    0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x30, 0x30,
    0x18, 0x0C, 0x06, 0x06, 0xC6, 0xFE, 0x00, 0x00,
    // '8'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6,
    0xC6, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00,
    // '9'
    0x00, 0x00, 0x00, 0x00, 0x78, 0x0C, 0x06, 0x06,
    0x06, 0x7E, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00,
    // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00,
    0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // ';'
    0x00, 0x00, 0x00, 0x00, 0x30, 0x18, 0x18, 0x00,
    0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // '<'
    0x00, 0x00, 0x00, 0x00, 0x06, 0x0C, 0x18, 0x30,
    0x60, 0x30, 0x18, 0x0C, 0x06, 0x00, 0x00, 0x00,
    // '='
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E,
    0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '>'
    0x00, 0x00, 0x00, 0x00, 0x60, 0x30, 0x18, 0x0C,
    0x06, 0x0C, 0x18, 0x30, 0x60, 0x00, 0x00, 0x00,
    // '?'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x18,
    0x18, 0x18, 0x0C, 0xC6, 0xC6, 0x7C, 0x00, 0x00,
    // '@'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC0, 0xDC, 0xDE,
    0xDE, 0xDE, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00,
    // 'A'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6,
    0xFE, 0xC6, 0xC6, 0x6C, 0x38, 0x10, 0x00, 0x00,
    // 'B'
    0x00, 0x00, 0x00, 0x00, 0xFC, 0x66, 0x66, 0x66,
    0x66, 0x7C, 0x66, 0x66, 0x66, 0xFC, 0x00, 0x00,
    // 'C'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC2, 0x66, 0x3C, 0x00, 0x00,
    // 'D'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0x6C, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x6C, 0xF8, 0x00, 0x00,
    // 'E'
    0x00, 0x00, 0x00, 0x00, 0xFE, 0x66, 0x62, 0x60,
    0x68, 0x78, 0x68, 0x62, 0x66, 0xFE, 0x00, 0x00,
    // 'F'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0x60, 0x60, 0x60,
    0x68, 0x78, 0x68, 0x62, 0x66, 0xFE, 0x00, 0x00,
    // 'G'
    0x00, 0x00, 0x00, 0x00, 0x3A, 0x66, 0xC6, 0xC6,
    0xDE, 0xC0, 0xC0, 0xC2, 0x66, 0x3C, 0x00, 0x00,
    // 'H'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xFE, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00,
    // 'I'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00, 0x00,
    // 'J'
    0x00, 0x00, 0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC,
    0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00, 0x00,
    // 'K'
    0x00, 0x00, 0x00, 0x00, 0xE6, 0x66, 0x66, 0x6C,
    0x78, 0x78, 0x6C, 0x66, 0x66, 0xE6, 0x00, 0x00,
    // 'L'
    0x00, 0x00, 0x00, 0x00, 0xFE, 0x66, 0x62, 0x60,
    0x60, 0x60, 0x60, 0x60, 0x60, 0xF0, 0x00, 0x00,
    // 'M'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xD6, 0xFE, 0xFE, 0xEE, 0xC6, 0x00, 0x00,
    // 'N'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6,
    0xCE, 0xDE, 0xFE, 0xF6, 0xE6, 0xC6, 0x00, 0x00,
    // 'O'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00,
    // 'P'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0x60, 0x60, 0x60,
    0x60, 0x7C, 0x66, 0x66, 0x66, 0xFC, 0x00, 0x00,
    // 'Q'
    0x00, 0x00, 0x0E, 0x0C, 0x7C, 0xDE, 0xD6, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00,
    // 'R'
    0x00, 0x00, 0x00, 0x00, 0xE6, 0x66, 0x66, 0x66,
    0x6C, 0x7C, 0x66, 0x66, 0x66, 0xFC, 0x00, 0x00,
    // 'S'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x06,
    0x0C, 0x38, 0x60, 0xC6, 0xC6, 0x7C, 0x00, 0x00,
    // 'T'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x5A, 0x7E, 0x7E, 0x00, 0x00,
    // 'U'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00,
    // 'V'
    0x00, 0x00, 0x00, 0x00, 0x10, 0x38, 0x6C, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00,
    // 'W'
    0x00, 0x00, 0x00, 0x00, 0x6C, 0xEE, 0xFE, 0xD6,
    0xD6, 0xD6, 0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00,
    // 'X'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0x6C, 0x7C,
    0x38, 0x38, 0x7C, 0x6C, 0xC6, 0xC6, 0x00, 0x00,
    // 'Y'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x18, 0x18, 0x18,
    0x18, 0x3C, 0x66, 0x66, 0x66, 0x66, 0x00, 0x00,
    // 'Z'
    0x00, 0x00, 0x00, 0x00, 0xFE, 0xC6, 0xC2, 0x60,
    0x30, 0x18, 0x0C, 0x86, 0xC6, 0xFE, 0x00, 0x00,
    // '['
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00, 0x00,
    // '\\'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x06, 0x0C,
    0x18, 0x30, 0x60, 0xC0, 0x80, 0x00, 0x00, 0x00,
    // ']'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x0C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00, 0x00,
    // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xC6, 0x6C, 0x38, 0x10,
    // '_'
    0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '`'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0C, 0x18, 0x30, 0x00,
    // 'a'
    0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC, 0xCC,
    0x7C, 0x0C, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'b'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0x66, 0x66, 0x66,
    0x66, 0x6C, 0x78, 0x60, 0x60, 0xE0, 0x00, 0x00,
    // 'c'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC0, 0xC0,
    0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'd'
    0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC, 0xCC,
    0xCC, 0x6C, 0x3C, 0x0C, 0x0C, 0x1C, 0x00, 0x00,
    // 'e'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC0, 0xC0,
    0xFE, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'f'
    0x00, 0x00, 0x00, 0x00, 0x78, 0x30, 0x30, 0x30,
    0x30, 0x78, 0x30, 0x32, 0x36, 0x1C, 0x00, 0x00,
    // 'g'
    0x00, 0x78, 0xCC, 0x0C, 0x7C, 0xCC, 0xCC, 0xCC,
    0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'h'
    0x00, 0x00, 0x00, 0x00, 0xE6, 0x66, 0x66, 0x66,
    0x66, 0x76, 0x6C, 0x60, 0x60, 0xE0, 0x00, 0x00,
    // 'i'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x38, 0x00, 0x18, 0x18, 0x00, 0x00,
    // 'j'
    0x00, 0x3C, 0x66, 0x66, 0x06, 0x06, 0x06, 0x06,
    0x06, 0x06, 0x0E, 0x00, 0x06, 0x06, 0x00, 0x00,
    // 'k'
    0x00, 0x00, 0x00, 0x00, 0xE6, 0x66, 0x6C, 0x78,
    0x78, 0x6C, 0x66, 0x60, 0x60, 0xE0, 0x00, 0x00,
    // 'l'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x18, 0x18, 0x38, 0x00, 0x00,
    // 'm'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0xD6, 0xD6, 0xD6,
    0xD6, 0xFE, 0xEC, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'n'
    0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'o'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'p'
    0x00, 0xF0, 0x60, 0x60, 0x7C, 0x66, 0x66, 0x66,
    0x66, 0x66, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'q'
    0x00, 0x1E, 0x0C, 0x0C, 0x7C, 0xCC, 0xCC, 0xCC,
    0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'r'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0x60, 0x60, 0x60,
    0x66, 0x76, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 's'
    0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0x0C, 0x38,
    0x60, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 't'
    0x00, 0x00, 0x00, 0x00, 0x1C, 0x36, 0x30, 0x30,
    0x30, 0x30, 0xFC, 0x30, 0x30, 0x10, 0x00, 0x00,
    // 'u'
    0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'v'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x3C, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'w'
    0x00, 0x00, 0x00, 0x00, 0x6C, 0xFE, 0xD6, 0xD6,
    0xD6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'x'
    0x00, 0x00, 0x00, 0x00, 0xC6, 0x6C, 0x38, 0x38,
    0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'y'
    0x00, 0xF8, 0x0C, 0x06, 0x7E, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'z'
    0x00, 0x00, 0x00, 0x00, 0xFE, 0xC6, 0x60, 0x30,
    0x18, 0xCC, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '{'
    0x00, 0x00, 0x00, 0x00, 0x0E, 0x18, 0x18, 0x18,
    0x18, 0x70, 0x18, 0x18, 0x18, 0x0E, 0x00, 0x00,
    // '|'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x18,
    0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00,
    // '}'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x18, 0x18, 0x18,
    0x18, 0x0E, 0x18, 0x18, 0x18, 0x70, 0x00, 0x00,
    // '~'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xDC, 0x76, 0x00, 0x00,
];
