//! Text mode console driver.
//!
//! A [`Console`] owns the 80x25 cell grid and the cursor. Every cell write
//! goes through [`Console::put_cell_at`], which rejects coordinates outside
//! the grid. The console itself takes no lock: callers sharing one instance
//! across execution contexts must serialize every `put_*`/`write*` call
//! (see [`crate::global`]).

use core::ffi::{c_char, CStr};
use core::fmt;
use volatile::Volatile;
use crate::color::{Color, ColorCode};
use crate::constants::chars::{
    BLANK, NEWLINE, NUL, PRINTABLE_END, PRINTABLE_START, REPLACEMENT,
};
use crate::constants::vga::{BUFFER_HEIGHT, BUFFER_WIDTH};
use crate::error::{ConsoleError, Result};

/// One display position: character in the low byte, attribute in the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Cell {
    pub ascii_character: u8,
    pub color_code: ColorCode,
}

impl Cell {
    pub const fn new(ascii_character: u8, color_code: ColorCode) -> Cell {
        Cell { ascii_character, color_code }
    }

    pub const fn blank(color_code: ColorCode) -> Cell {
        Cell::new(BLANK, color_code)
    }

    pub const fn to_u16(self) -> u16 {
        (self.color_code.as_u8() as u16) << 8 | self.ascii_character as u16
    }

    pub const fn from_u16(raw: u16) -> Cell {
        Cell::new(raw as u8, ColorCode::from_u8((raw >> 8) as u8))
    }
}

/// The character grid, laid out exactly like the hardware frame buffer.
#[repr(transparent)]
pub struct Buffer {
    chars: [[Volatile<Cell>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

impl Buffer {
    /// An off-screen grid of default blanks.
    pub fn new() -> Buffer {
        let blank = Cell::blank(ColorCode::DEFAULT);
        Buffer {
            chars: core::array::from_fn(|_| core::array::from_fn(|_| Volatile::new(blank))),
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer::new()
    }
}

/// What happens when the cursor would move below the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPolicy {
    /// Cursor returns to row 0; old content is overwritten in place.
    WrapToTop,
    /// Every row moves up by one and the bottom row is blanked.
    ShiftUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub scroll_policy: ScrollPolicy,
    pub default_attribute: ColorCode,
}

impl Config {
    pub const DEFAULT: Config = Config {
        scroll_policy: ScrollPolicy::ShiftUp,
        default_attribute: ColorCode::DEFAULT,
    };
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}

pub struct Console<'a> {
    column_position: usize,
    row_position: usize,
    color_code: ColorCode,
    config: Config,
    scroll_count: usize,
    buffer: &'a mut Buffer,
}

impl<'a> Console<'a> {
    /// Takes ownership of `buffer`, blanks it with the default attribute and
    /// homes the cursor.
    pub fn initialize(buffer: &'a mut Buffer, config: Config) -> Console<'a> {
        let mut console = Console {
            column_position: 0,
            row_position: 0,
            color_code: config.default_attribute,
            config,
            scroll_count: 0,
            buffer,
        };
        console.clear_screen();
        console
    }

    /// Writes one cell. The cursor does not move.
    pub fn put_cell_at(
        &mut self,
        character: u8,
        color_code: ColorCode,
        column: usize,
        row: usize,
    ) -> Result<()> {
        if column >= BUFFER_WIDTH || row >= BUFFER_HEIGHT {
            return Err(ConsoleError::OutOfBounds { column, row });
        }
        self.buffer.chars[row][column].write(Cell::new(character, color_code));
        Ok(())
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Result<Cell> {
        if column >= BUFFER_WIDTH || row >= BUFFER_HEIGHT {
            return Err(ConsoleError::OutOfBounds { column, row });
        }
        Ok(self.buffer.chars[row][column].read())
    }

    pub fn put_char(&mut self, byte: u8) -> Result<()> {
        match byte {
            NEWLINE => self.new_line(),
            _ => {
                self.put_cell_at(byte, self.color_code, self.column_position, self.row_position)?;
                self.column_position += 1;
                if self.column_position == BUFFER_WIDTH {
                    self.new_line();
                }
            }
        }
        Ok(())
    }

    /// Feeds every byte through [`put_char`](Self::put_char), in order.
    /// Bytes written before an error stay on screen.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.put_char(byte)?;
        }
        Ok(())
    }

    /// Writes a zero-terminated byte string, excluding the terminator.
    ///
    /// `None` stands in for a null reference. A slice with no terminator is
    /// malformed. Both fail with [`ConsoleError::InvalidInput`] before
    /// anything is drawn.
    pub fn write_string(&mut self, data: Option<&[u8]>) -> Result<()> {
        let data = data.ok_or(ConsoleError::InvalidInput)?;
        let len = data
            .iter()
            .position(|&byte| byte == NUL)
            .ok_or(ConsoleError::InvalidInput)?;
        self.write(&data[..len])
    }

    /// Entry point for callers holding a raw C string.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a readable, zero-terminated byte
    /// sequence.
    pub unsafe fn write_cstr(&mut self, ptr: *const u8) -> Result<()> {
        if ptr.is_null() {
            return Err(ConsoleError::InvalidInput);
        }
        let data = CStr::from_ptr(ptr as *const c_char);
        self.write_string(Some(data.to_bytes_with_nul()))
    }

    pub fn set_attribute(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
    }

    pub fn set_color_code(&mut self, color_code: ColorCode) {
        self.color_code = color_code;
    }

    pub fn attribute(&self) -> ColorCode {
        self.color_code
    }

    /// Current `(column, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.column_position, self.row_position)
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// How many times the scroll policy has run since initialization.
    pub fn scroll_count(&self) -> usize {
        self.scroll_count
    }

    fn new_line(&mut self) {
        self.column_position = 0;
        if self.row_position < BUFFER_HEIGHT - 1 {
            self.row_position += 1;
            return;
        }
        self.scroll_count = self.scroll_count.wrapping_add(1);
        match self.config.scroll_policy {
            ScrollPolicy::WrapToTop => self.row_position = 0,
            ScrollPolicy::ShiftUp => {
                for row in 1..BUFFER_HEIGHT {
                    for col in 0..BUFFER_WIDTH {
                        let character = self.buffer.chars[row][col].read();
                        self.buffer.chars[row - 1][col].write(character);
                    }
                }
                self.clear_row(BUFFER_HEIGHT - 1);
            }
        }
    }

    /// Blanks `row` with the current attribute. Rows past the grid are ignored.
    pub fn clear_row(&mut self, row: usize) {
        if row >= BUFFER_HEIGHT {
            return;
        }
        let blank = Cell::blank(self.color_code);
        for col in 0..BUFFER_WIDTH {
            self.buffer.chars[row][col].write(blank);
        }
    }

    pub fn clear_screen(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.column_position = 0;
        self.row_position = 0;
    }
}

impl Console<'static> {
    /// Maps the console onto a frame buffer at `addr` and initializes it.
    ///
    /// # Safety
    ///
    /// `addr` must be the start of a mapped, writable region of
    /// `BUFFER_WIDTH * BUFFER_HEIGHT` 16-bit cells that nothing else
    /// references for the rest of the program.
    pub unsafe fn from_address(addr: usize, config: Config) -> Console<'static> {
        Console::initialize(&mut *(addr as *mut Buffer), config)
    }
}

impl fmt::Write for Console<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            let byte = match byte {
                PRINTABLE_START..=PRINTABLE_END | NEWLINE => byte,
                _ => REPLACEMENT,
            };
            self.put_char(byte).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
