#![no_std]
#![no_main]
#![feature(abi_x86_interrupt)]

extern crate alloc;

mod boot_splash;
mod commands;
mod console;
mod font;
mod history;
mod hud;
mod interrupts;
mod keyboard;
mod lang;
mod memory;
mod pic;
mod serial;
mod time;
mod timer;
mod wait;
mod hudmodules {
    pub mod countdown;
    pub mod datenum;
    pub mod daymonth;
}

use bootloader_api::{config::BootloaderConfig, entry_point, BootInfo};
use console::{init_console, with_console};
use core::panic::PanicInfo;
use heapless::String;
use keyboard::Keyboard;
use x86_64::instructions::interrupts as cpu_intr;

pub const OS_NAME: &str = "ChronOS";
pub const OS_VERSION: &str = "1.C004.12.260807.MERIDIAN@b51d3";

static BOOTLOADER_CONFIG: BootloaderConfig = {
    let cfg = BootloaderConfig::new_default();
    cfg
};

entry_point!(kernel_main, config = &BOOTLOADER_CONFIG);

fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
    serial::write("ChronOS: kernel entry");
    memory::init_memory(boot_info);

    init_console(boot_info);
    with_console(|c| c.reserve_hud_rows(1));
    hudmodules::datenum::init();
    hudmodules::daymonth::init();
    hudmodules::countdown::init();

    interrupts::init_idt();
    pic::init_pic();
    timer::init_pit();
    cpu_intr::enable();
    serial::debug("interrupts online, PIT at 100 Hz");

    time::init();
    // First draw immediately; the recurring cadence aligns itself to the
    // next wall-clock second.
    hud::enable();

    boot_splash::show();

    with_console(|c| {
        c.clear();
        c.write_line("==================================================\n");
        c.write_line(OS_NAME);
        c.write_line("The midnight countdown machine");
        c.write_line("--------------------------------------------------\n");
        c.write_line(OS_VERSION);
        c.write_line("");
        c.write_line("Type 'help' for commands.");
        c.write_line("==================================================\n");
    });

    if !time::is_initialized() {
        console::write_line("No RTC time; the HUD clock is idle.");
        console::write_line("Use: time set YYYY-MM-DD HH:MM:SS");
    }

    with_console(|c| {
        c.newline();
        c.put_char('>');
    });

    let mut kbd = Keyboard::new();
    let mut line = String::<128>::new();
    let mut draft_line = String::<128>::new();
    let mut history_index: Option<usize> = None;

    loop {
        if let Some(evt) = kbd.poll_event() {
            match evt {
                keyboard::KeyEvent::Char(ch) => {
                    if line.push(ch).is_ok() {
                        with_console(|c| c.put_char(ch));
                    }
                    history_index = None;
                }
                keyboard::KeyEvent::Backspace => {
                    if line.pop().is_some() {
                        with_console(|c| c.backspace());
                    }
                    history_index = None;
                }
                keyboard::KeyEvent::CtrlBackspace => {
                    let removed = delete_prev_word(&mut line);
                    if removed > 0 {
                        with_console(|c| {
                            for _ in 0..removed {
                                c.backspace();
                            }
                        });
                    }
                    history_index = None;
                }
                keyboard::KeyEvent::Up => {
                    let hist_len = history::len();
                    if hist_len == 0 {
                        continue;
                    }
                    if history_index.is_none() {
                        draft_line.clear();
                        let _ = draft_line.push_str(&line);
                    }
                    let new_idx = history_index
                        .map(|i| i.saturating_sub(1))
                        .unwrap_or_else(|| hist_len.saturating_sub(1));
                    if let Some(new_line) = history::entry(new_idx) {
                        history_index = Some(new_idx);
                        replace_input_line(&mut line, &new_line);
                    } else {
                        history_index = None;
                    }
                }
                keyboard::KeyEvent::Down => {
                    let hist_len = history::len();
                    if hist_len == 0 {
                        continue;
                    }
                    if let Some(idx) = history_index {
                        if idx + 1 < hist_len {
                            if let Some(new_line) = history::entry(idx + 1) {
                                history_index = Some(idx + 1);
                                replace_input_line(&mut line, &new_line);
                            }
                        } else {
                            history_index = None;
                            replace_input_line(&mut line, &draft_line);
                        }
                    }
                }
                keyboard::KeyEvent::Enter => {
                    with_console(|c| c.newline());
                    commands::handle_line(&line);
                    history::push(&line);
                    line.clear();
                    draft_line.clear();
                    history_index = None;
                    with_console(|c| c.put_char('>'));
                }
            }
        }
    }
}

fn delete_prev_word(line: &mut String<128>) -> usize {
    let mut removed = 0;

    while let Some(ch) = line.chars().next_back() {
        if ch.is_ascii_whitespace() {
            line.pop();
            removed += 1;
        } else {
            break;
        }
    }

    while let Some(ch) = line.chars().next_back() {
        if !ch.is_ascii_whitespace() {
            line.pop();
            removed += 1;
        } else {
            break;
        }
    }

    removed
}

fn replace_input_line(line: &mut String<128>, new_content: &str) {
    with_console(|c| {
        for _ in 0..line.len() {
            c.backspace();
        }
        for ch in new_content.chars() {
            c.put_char(ch);
        }
    });
    line.clear();
    let _ = line.push_str(new_content);
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    with_console(|c| {
        c.write_line("");
        c.cwrite_line("=== KERNEL PANIC ===", 0xFF0000, 0x000000);
        let msg = panic_message(info);
        c.cwrite_line(&msg, 0xFFFF8F, 0x000000);
        c.write_line("");
        c.cwrite_line("Attempting to fix via reboot...", 0x0047AB, 0x000000);
    });

    wait::bsec(3);

    commands::reboot();

    with_console(|c| {
        c.write_line("Reboot failed! Halting...");
    });

    loop {
        unsafe { x86::halt() };
    }
}

fn panic_message(info: &PanicInfo) -> heapless::String<256> {
    use core::fmt::Write;
    let mut s = heapless::String::<256>::new();
    let _ = write!(&mut s, "{info}");
    s
}
