//! `log` backend that prints to the global console.

use core::fmt::{self, Write};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use crate::color::{Color, ColorCode};
use crate::global::{self, CONSOLE};
use crate::vga_buffer::Console;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut console = CONSOLE.lock();
        let _ = write_record(&mut console, record.level(), record.target(), record.args());
        global::sync_cursor(&console);
    }

    fn flush(&self) {}
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::LightRed,
        Level::Warn => Color::LightBrown,
        Level::Info => Color::LightGreen,
        Level::Debug | Level::Trace => Color::DarkGray,
    }
}

/// Writes `[LEVEL] target: message` on its own line. Only the level tag is
/// colored; the caller's attribute is restored afterward.
pub fn write_record(
    console: &mut Console<'_>,
    level: Level,
    target: &str,
    args: &fmt::Arguments,
) -> fmt::Result {
    let saved = console.attribute();
    console.set_color_code(ColorCode::new(level_color(level), saved.background()));
    let tag = write!(console, "[{}]", level);
    console.set_color_code(saved);
    tag?;
    writeln!(console, " {}: {}", target, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga_buffer::{Buffer, Config};

    fn row_string(console: &Console, row: usize, len: usize) -> String {
        (0..len)
            .map(|col| console.cell_at(col, row).unwrap().ascii_character as char)
            .collect()
    }

    #[test]
    fn test_write_record_layout() {
        let mut buffer = Buffer::new();
        let mut console = Console::initialize(&mut buffer, Config::DEFAULT);

        write_record(&mut console, Level::Warn, "boot", &format_args!("x={}", 3)).unwrap();
        assert_eq!(row_string(&console, 0, 16), "[WARN] boot: x=3");
        assert_eq!(console.cursor(), (0, 1));
    }

    #[test]
    fn test_write_record_colors_tag_only() {
        let mut buffer = Buffer::new();
        let mut console = Console::initialize(&mut buffer, Config::DEFAULT);

        write_record(&mut console, Level::Error, "mm", &format_args!("oom")).unwrap();
        let tag = ColorCode::new(Color::LightRed, Color::Black);
        assert_eq!(console.cell_at(1, 0).unwrap().color_code, tag);
        assert_eq!(console.cell_at(9, 0).unwrap().color_code, ColorCode::DEFAULT);
        assert_eq!(console.attribute(), ColorCode::DEFAULT);
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(level_color(Level::Info), Color::LightGreen);
        assert_eq!(level_color(Level::Trace), Color::DarkGray);
    }
}
