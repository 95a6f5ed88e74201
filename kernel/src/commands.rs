use alloc::format;
use heapless::{String as HString, Vec};

use core::fmt::Write;

use crate::{console, hud, lang, memory, time, timer, wait};

pub fn handle_line(input: &str) {
    let mut parts: Vec<&str, 16> = Vec::new();
    for word in input.split_whitespace() {
        let _ = parts.push(word);
    }

    if parts.is_empty() {
        return;
    }

    let command = parts[0].to_ascii_lowercase();

    match command.as_str() {
        "help" => help(),
        "version" => version(),
        "echo" => echo(&parts[1..]),
        "clear" | "cls" => console::clear_screen(),
        "time" => time::time_cmd(&parts[1..]),
        "locale" => locale_cmd(&parts[1..]),
        "hud" => hud_cmd(&parts[1..]),
        "uptime" => uptime(),
        "meminfo" => meminfo(),
        "reboot" => reboot(),
        "shutdown" => shutdown(),
        "halt" => halt_cmd(&parts[1..]),
        _ => console::write_line(&format!("Unknown command: {}", parts[0])),
    }
}

fn help() {
    console::write_line("\nAvailable commands:");
    console::write_line("  help            - Show this help");
    console::write_line("  version         - Show version");
    console::write_line("  echo <text>     - Print text");
    console::write_line("  clear           - Clear the screen");
    console::write_line("  time            - Show the wall clock");
    console::write_line("  time set <d> <t>- Set it (YYYY-MM-DD HH:MM:SS)");
    console::write_line("  time sync       - Re-seed it from the RTC");
    console::write_line("  locale          - Show the HUD locale");
    console::write_line("  locale list     - List bundled locales");
    console::write_line("  locale <tag>    - Switch the HUD locale");
    console::write_line("  hud on|off      - Toggle the clock row");
    console::write_line("  hud redraw      - Force a draw");
    console::write_line("  uptime          - Ticks since boot as h:m:s");
    console::write_line("  meminfo         - Show memory info");
    console::write_line("  reboot          - Reboot the machine");
    console::write_line("  shutdown        - Power down the machine\n");
}

fn version() {
    console::write_line(&format!("{} {}", crate::OS_NAME, crate::OS_VERSION));
    console::write_line("Built with Rust.");
}

fn echo(args: &[&str]) {
    let mut s = HString::<128>::new();
    for (i, word) in args.iter().enumerate() {
        if i > 0 {
            let _ = s.push(' ');
        }
        let _ = s.push_str(word);
    }
    console::write_line(&s);
}

fn locale_cmd(args: &[&str]) {
    match args {
        [] => console::write_line(&format!("HUD locale: {}", lang::current().tag)),
        ["list"] => {
            console::write_line("Bundled locales:");
            for tag in lang::tags() {
                console::write_line(&format!("  {}", tag));
            }
        }
        [tag] => {
            if lang::set(tag) {
                console::write_line(&format!("HUD locale set to {}.", lang::current().tag));
                hud::redraw();
            } else {
                console::write_line(&format!("Unknown locale: {} (try 'locale list')", tag));
            }
        }
        _ => console::write_line("Usage: locale [list | <tag>]"),
    }
}

fn hud_cmd(args: &[&str]) {
    match args {
        ["on"] => {
            hud::enable();
            console::write_line("HUD enabled.");
        }
        ["off"] => {
            hud::disable();
            console::write_line("HUD disabled.");
        }
        ["redraw"] => hud::redraw(),
        [] => console::write_line(if hud::is_enabled() { "HUD is on." } else { "HUD is off." }),
        _ => console::write_line("Usage: hud [on | off | redraw]"),
    }
}

fn uptime() {
    let secs = timer::ticks() / timer::frequency();
    let mins = secs / 60;
    let hours = mins / 60;
    console::write_line(&format!("Uptime: {:02}:{:02}:{:02}", hours, mins % 60, secs % 60));
}

fn format_bytes<const N: usize>(bytes: usize) -> HString<N> {
    let mut s: HString<N> = HString::new();
    if bytes >= 1024 * 1024 {
        let _ = write!(s, "{} MB", bytes / 1024 / 1024);
    } else if bytes >= 1024 {
        let _ = write!(s, "{} KB", bytes / 1024);
    } else {
        let _ = write!(s, "{} B", bytes);
    }
    s
}

fn meminfo() {
    let sys = memory::system_stats();
    let heap = memory::heap_stats();

    console::write_line(&format!(
        "System memory:\n  Total: {}\n  Reserved: {}\n  Free: {}",
        format_bytes::<32>(sys.total),
        format_bytes::<32>(sys.reserved),
        format_bytes::<32>(sys.free),
    ));

    console::write_line(&format!(
        "\nKernel heap:\n  Total: {}\n  Used: {}\n  Free: {}",
        format_bytes::<32>(heap.total),
        format_bytes::<32>(heap.used),
        format_bytes::<32>(heap.free),
    ));
}

pub fn reboot() {
    console::write_line("Attempting to reboot...");
    wait::bms(200);

    unsafe {
        x86::io::outb(0x64, 0xFE);
    }

    console::write_line("Something went wrong, attempting to restart the machine\n");
}

pub fn shutdown() -> ! {
    console::write_line("Attempting to shut down...");

    unsafe {
        x86::io::outw(0x604, 0x2000);
    }

    console::write_line("\nSomething went wrong attempting to shut down the machine.");
    console::write_line("Halting to allow for safe machine shutdown....\n");

    loop {
        unsafe { x86::halt() };
    }
}

fn halt_cmd(args: &[&str]) {
    if args.len() == 1 && args[0] == "yes-i-know" {
        console::write_line("System halted.");
        loop {
            unsafe { x86::halt() };
        }
    } else {
        console::write_line("Refusing to halt. Use: halt yes-i-know");
    }
}
