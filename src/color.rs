/// The sixteen entries of the text mode palette.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl Color {
    /// Maps a palette index back to its color; only the low nibble counts.
    pub const fn from_index(index: u8) -> Color {
        match index & 0x0f {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            7 => Color::LightGray,
            8 => Color::DarkGray,
            9 => Color::LightBlue,
            10 => Color::LightGreen,
            11 => Color::LightCyan,
            12 => Color::LightRed,
            13 => Color::LightMagenta,
            14 => Color::LightBrown,
            _ => Color::White,
        }
    }
}

/// Foreground/background pair as stored in the high byte of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const DEFAULT: ColorCode = ColorCode::new(Color::LightGray, Color::Black);

    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    pub const fn from_u8(raw: u8) -> ColorCode {
        ColorCode(raw)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub const fn foreground(self) -> Color {
        Color::from_index(self.0)
    }

    pub const fn background(self) -> Color {
        Color::from_index(self.0 >> 4)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        ColorCode::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_values() {
        assert_eq!(Color::Black as u8, 0);
        assert_eq!(Color::Blue as u8, 1);
        assert_eq!(Color::Red as u8, 4);
        assert_eq!(Color::LightGray as u8, 7);
        assert_eq!(Color::DarkGray as u8, 8);
        assert_eq!(Color::LightBrown as u8, 14);
        assert_eq!(Color::White as u8, 15);
    }

    #[test]
    fn test_color_code_encoding() {
        assert_eq!(ColorCode::new(Color::White, Color::Black).as_u8(), 0x0F);
        assert_eq!(ColorCode::new(Color::Black, Color::White).as_u8(), 0xF0);
        assert_eq!(ColorCode::new(Color::LightBrown, Color::Blue).as_u8(), 0x1E);
        assert_eq!(ColorCode::DEFAULT.as_u8(), 0x07);
    }

    #[test]
    fn test_color_code_split() {
        let code = ColorCode::new(Color::LightCyan, Color::Magenta);
        assert_eq!(code.foreground(), Color::LightCyan);
        assert_eq!(code.background(), Color::Magenta);
    }

    #[test]
    fn test_from_index_covers_palette() {
        for index in 0..16u8 {
            assert_eq!(Color::from_index(index) as u8, index);
        }
        assert_eq!(Color::from_index(0x1f), Color::White);
    }
}
