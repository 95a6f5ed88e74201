extern crate alloc;

use alloc::format;

use crate::console::{size_chars, with_console, DrawPos};
use crate::wait;

pub fn show() {
    const ART: &[&str] = &[
        r"  ____ _                      ___  ____  ",
        r" / ___| |__  _ __ ___  _ __  / _ \/ ___| ",
        r"| |   | '_ \| '__/ _ \| '_ \| | | \___ \ ",
        r"| |___| | | | | | (_) | | | | |_| |___) |",
        r" \____|_| |_|_|  \___/|_| |_|\___/|____/ ",
        "",
        "",
    ];

    const STATUS_FRAMES: &[&str] = &[
        "winding the clock.",
        "winding the clock..",
        "winding the clock...",
    ];

    let art_width = ART.iter().map(|l| l.len()).max().unwrap_or(0);
    let status_width = STATUS_FRAMES.iter().map(|l| l.len()).max().unwrap_or(0);
    let block_width = core::cmp::max(art_width, status_width);
    let block_height = ART.len();

    let (cols, rows) = size_chars();
    let start_x = cols.saturating_sub(block_width) / 2;
    let start_y = rows.saturating_sub(block_height) / 2;
    let status_row = start_y + block_height.saturating_sub(1);

    with_console(|c| {
        c.clear();
        for (i, line) in ART.iter().enumerate() {
            let padded = format!("{:<width$}", *line, width = block_width);
            c.draw_text_at_char(DrawPos::Char(start_x, start_y + i), &padded);
        }
    });

    for i in 0..6 {
        let msg = STATUS_FRAMES[i % STATUS_FRAMES.len()];
        let padded = format!("{:<width$}", msg, width = block_width);
        with_console(|c| {
            c.draw_text_at_char(DrawPos::Char(start_x, status_row), &padded);
        });
        wait::bms(350);
    }

    with_console(|c| c.clear());
}
