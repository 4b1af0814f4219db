//! System-wide constants to avoid magic numbers

/// VGA text mode constants
pub mod vga {
    /// VGA text buffer physical address
    pub const BUFFER_ADDR: usize = 0xb8000;

    /// VGA text mode dimensions
    pub const BUFFER_HEIGHT: usize = 25;
    pub const BUFFER_WIDTH: usize = 80;
    pub const BUFFER_CELLS: usize = BUFFER_WIDTH * BUFFER_HEIGHT;

    /// VGA control ports
    pub const COMMAND_PORT: u16 = 0x3D4;
    pub const DATA_PORT: u16 = 0x3D5;

    /// Cursor control registers
    pub const CURSOR_START_REG: u8 = 0x0A;
    pub const CURSOR_END_REG: u8 = 0x0B;
    pub const CURSOR_LOCATION_HIGH: u8 = 0x0E;
    pub const CURSOR_LOCATION_LOW: u8 = 0x0F;

    /// Underline-style cursor scanlines
    pub const CURSOR_SCANLINE_START: u8 = 14;
    pub const CURSOR_SCANLINE_END: u8 = 15;
}

/// Character codes the console treats specially
pub mod chars {
    pub const BLANK: u8 = b' ';
    pub const NEWLINE: u8 = b'\n';
    pub const NUL: u8 = 0;

    /// Code page 437 filled square, drawn for bytes a `&str` can't map
    pub const REPLACEMENT: u8 = 0xfe;

    pub const PRINTABLE_START: u8 = 0x20;
    pub const PRINTABLE_END: u8 = 0x7e;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(vga::BUFFER_WIDTH, 80);
        assert_eq!(vga::BUFFER_HEIGHT, 25);
        assert_eq!(vga::BUFFER_CELLS, 2000);
    }

    #[test]
    fn test_buffer_address() {
        assert_eq!(vga::BUFFER_ADDR, 0xB8000);
    }
}
