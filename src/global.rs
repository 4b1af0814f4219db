//! The kernel-wide console.
//!
//! The driver has no lock of its own, so the one shared instance lives behind
//! a spin mutex. Every `print!`, log line and [`with_console`] call goes
//! through that lock.

use core::fmt;
use spin::Mutex;
use lazy_static::lazy_static;
use crate::constants::vga::BUFFER_ADDR;
use crate::vga_buffer::{Config, Console};

lazy_static! {
    pub static ref CONSOLE: Mutex<Console<'static>> =
        Mutex::new(unsafe { Console::from_address(BUFFER_ADDR, Config::DEFAULT) });
}

/// Blanks the screen and shows the hardware cursor. Call once at boot before
/// any output.
pub fn init() {
    lazy_static::initialize(&CONSOLE);
    #[cfg(all(target_arch = "x86_64", feature = "hw-cursor"))]
    {
        crate::cursor::enable();
        crate::cursor::set_position(0, 0);
    }
}

/// Runs `f` with the console locked, then moves the hardware cursor to match.
pub fn with_console<R>(f: impl FnOnce(&mut Console<'static>) -> R) -> R {
    let mut console = CONSOLE.lock();
    let result = f(&mut console);
    sync_cursor(&console);
    result
}

pub(crate) fn sync_cursor(_console: &Console<'_>) {
    #[cfg(all(target_arch = "x86_64", feature = "hw-cursor"))]
    {
        let (column, row) = _console.cursor();
        crate::cursor::set_position(column, row);
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::global::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;
    let _ = with_console(|console| console.write_fmt(args));
}
