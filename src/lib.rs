#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod constants;
pub mod error;
pub mod global;
pub mod logger;
pub mod vga_buffer;

#[cfg(target_arch = "x86_64")]
pub mod cursor;

pub use color::{Color, ColorCode};
pub use error::{ConsoleError, Result};
pub use vga_buffer::{Buffer, Cell, Config, Console, ScrollPolicy};
