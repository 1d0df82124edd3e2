//! RGB565 color constants.

pub const BLUE: u16 = 0x001F;
pub const GREEN: u16 = 0x07E0;
pub const RED: u16 = 0xF800;
pub const CYAN: u16 = 0x07FF;
pub const MAGENTA: u16 = 0xF81F;
pub const YELLOW: u16 = 0xFFE0;
pub const LIGHTBLUE: u16 = 0x841F;
pub const LIGHTGREEN: u16 = 0x87F0;
pub const LIGHTRED: u16 = 0xFC10;
pub const LIGHTCYAN: u16 = 0x87FF;
pub const LIGHTMAGENTA: u16 = 0xFC1F;
pub const LIGHTYELLOW: u16 = 0xFFF0;
pub const DARKBLUE: u16 = 0x0010;
pub const DARKGREEN: u16 = 0x0400;
pub const DARKRED: u16 = 0x8000;
pub const DARKCYAN: u16 = 0x0410;
pub const DARKMAGENTA: u16 = 0x8010;
pub const DARKYELLOW: u16 = 0x8400;
pub const WHITE: u16 = 0xFFFF;
pub const LIGHTGRAY: u16 = 0xD69A;
pub const GRAY: u16 = 0x8410;
pub const DARKGRAY: u16 = 0x4208;
pub const BLACK: u16 = 0x0000;
pub const BROWN: u16 = 0xA145;
pub const ORANGE: u16 = 0xFD20;

/// Packs 5-bit red, 6-bit green and 5-bit blue channels.
///
/// Out-of-range channel bits are masked off.
pub const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0x1F) << 11) | ((g as u16 & 0x3F) << 5) | (b as u16 & 0x1F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_pack_to_constants() {
        assert_eq!(rgb565(0x1F, 0, 0), RED);
        assert_eq!(rgb565(0, 0x3F, 0), GREEN);
        assert_eq!(rgb565(0, 0, 0x1F), BLUE);
        assert_eq!(rgb565(0x1F, 0x3F, 0x1F), WHITE);
        assert_eq!(rgb565(0xFF, 0xFF, 0xFF), WHITE);
    }
}
