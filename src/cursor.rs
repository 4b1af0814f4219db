//! Blinking hardware cursor, driven through the CRT controller.

use x86_64::instructions::port::Port;
use crate::constants::vga::{
    BUFFER_HEIGHT, BUFFER_WIDTH, COMMAND_PORT, CURSOR_END_REG, CURSOR_LOCATION_HIGH,
    CURSOR_LOCATION_LOW, CURSOR_SCANLINE_END, CURSOR_SCANLINE_START, CURSOR_START_REG, DATA_PORT,
};

/// Linear cell offset the CRT controller expects, or `None` off the grid.
pub fn offset(column: usize, row: usize) -> Option<u16> {
    if column >= BUFFER_WIDTH || row >= BUFFER_HEIGHT {
        return None;
    }
    Some((row * BUFFER_WIDTH + column) as u16)
}

pub fn enable() {
    let mut command: Port<u8> = Port::new(COMMAND_PORT);
    let mut data: Port<u8> = Port::new(DATA_PORT);

    unsafe {
        command.write(CURSOR_START_REG);
        let start = data.read();
        data.write((start & 0xC0) | CURSOR_SCANLINE_START);

        command.write(CURSOR_END_REG);
        let end = data.read();
        data.write((end & 0xE0) | CURSOR_SCANLINE_END);
    }
}

pub fn set_position(column: usize, row: usize) {
    let Some(pos) = offset(column, row) else {
        return;
    };
    let mut command: Port<u8> = Port::new(COMMAND_PORT);
    let mut data: Port<u8> = Port::new(DATA_PORT);

    unsafe {
        command.write(CURSOR_LOCATION_LOW);
        data.write((pos & 0xFF) as u8);
        command.write(CURSOR_LOCATION_HIGH);
        data.write((pos >> 8) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(offset(0, 0), Some(0));
        assert_eq!(offset(5, 2), Some(165));
        assert_eq!(offset(79, 24), Some(1999));
        assert_eq!(offset(80, 0), None);
        assert_eq!(offset(0, 25), None);
    }
}
