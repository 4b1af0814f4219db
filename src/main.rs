#![no_std]
#![no_main]

use core::fmt::Write;
use core::panic::PanicInfo;
use log::{info, LevelFilter};
use textcon::constants::vga::{BUFFER_HEIGHT, BUFFER_WIDTH};
use textcon::{global, logger, print, println, Color};

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // the lock may already be held by whatever panicked
    if let Some(mut console) = global::CONSOLE.try_lock() {
        console.set_attribute(Color::White, Color::Red);
        let _ = writeln!(console, "{}", info);
    }
    loop {
        x86_64::instructions::hlt();
    }
}

#[no_mangle]
pub extern "C" fn _start() -> ! {
    global::init();
    if logger::init(LevelFilter::Info).is_err() {
        println!("WARNING: logger already installed");
    }

    println!("PockerISO Microkernel");
    info!("console ready, {}x{} cells", BUFFER_WIDTH, BUFFER_HEIGHT);
    println!("Booting Alpine userspace...");
    println!();
    print!("$ ");

    loop {
        x86_64::instructions::hlt();
    }
}
