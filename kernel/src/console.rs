#![allow(dead_code)]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use bootloader_api::info::{FrameBufferInfo, PixelFormat};
use bootloader_api::BootInfo;
use spin::Mutex;
use x86_64::instructions::interrupts;

use crate::font;

const SCALE: usize = 2;
const CELL: usize = 8 * SCALE;
const DEFAULT_FG: u32 = 0xC8C8C8;
const DEFAULT_BG: u32 = 0x000000;

pub enum DrawPos {
    Char(usize, usize),
}

#[derive(Copy, Clone)]
pub enum HudAlign {
    Left,
    Center,
    Right,
}

pub struct Console {
    fb: &'static mut [u8],
    info: FrameBufferInfo,
    cols: usize,
    rows: usize,
    cursor_x: usize,
    cursor_y: usize,
    fg: u32,
    bg: u32,
    hud_rows: usize,
    hud_back: Option<Vec<u8>>,
}

fn put_px(info: &FrameBufferInfo, buf: &mut [u8], stride_px: usize, x: usize, y: usize, color: u32) {
    if x >= stride_px {
        return;
    }
    let bpp = info.bytes_per_pixel;
    let off = (y * stride_px + x) * bpp;
    if off + bpp > buf.len() {
        return;
    }
    let r = ((color >> 16) & 0xFF) as u8;
    let g = ((color >> 8) & 0xFF) as u8;
    let b = (color & 0xFF) as u8;
    match (info.pixel_format, bpp) {
        (PixelFormat::Rgb, 4) => {
            buf[off] = r;
            buf[off + 1] = g;
            buf[off + 2] = b;
            buf[off + 3] = 0xFF;
        }
        (PixelFormat::Rgb, 3) => {
            buf[off] = r;
            buf[off + 1] = g;
            buf[off + 2] = b;
        }
        (PixelFormat::Bgr, 4) => {
            buf[off] = b;
            buf[off + 1] = g;
            buf[off + 2] = r;
            buf[off + 3] = 0xFF;
        }
        (PixelFormat::Bgr, 3) => {
            buf[off] = b;
            buf[off + 1] = g;
            buf[off + 2] = r;
        }
        _ => {}
    }
}

fn draw_glyph_into(
    info: &FrameBufferInfo,
    dst: &mut [u8],
    stride_px: usize,
    x_char: usize,
    y_char: usize,
    c: char,
    fg: u32,
    bg: u32,
) {
    let glyph = font::glyph(c);
    let base_px = x_char * CELL;
    let base_py = y_char * CELL;
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8 {
            let pix = if (bits >> (7 - col)) & 1 == 1 { fg } else { bg };
            let px = base_px + col * SCALE;
            let py = base_py + row * SCALE;
            for dy in 0..SCALE {
                for dx in 0..SCALE {
                    put_px(info, dst, stride_px, px + dx, py + dy, pix);
                }
            }
        }
    }
}

impl Console {
    pub fn from_boot_info(boot: &'static mut BootInfo) -> Option<Self> {
        let fb = boot.framebuffer.as_mut()?;
        let info = fb.info();
        let slice = fb.buffer_mut();
        Some(Self {
            fb: slice,
            info,
            cols: info.width / CELL,
            rows: info.height / CELL,
            cursor_x: 0,
            cursor_y: 0,
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            hud_rows: 0,
            hud_back: None,
        })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn default_colors(&self) -> (u32, u32) {
        (self.fg, self.bg)
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for dy in 0..h {
            for dx in 0..w {
                let px = x + dx;
                let py = y + dy;
                if px < self.info.width && py < self.info.height {
                    put_px(&self.info, self.fb, self.info.stride, px, py, color);
                }
            }
        }
    }

    fn draw_glyph(&mut self, x_char: usize, y_char: usize, c: char, fg: u32) {
        let bg = self.bg;
        draw_glyph_into(&self.info, self.fb, self.info.stride, x_char, y_char, c, fg, bg);
    }

    pub fn clear(&mut self) {
        self.fill_rect(0, 0, self.info.width, self.info.height, self.bg);
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    pub fn put_char(&mut self, c: char) {
        self.erase_cursor();
        if c == '\n' {
            self.newline();
        } else {
            let fg = self.fg;
            self.draw_glyph(self.cursor_x, self.cursor_y, c, fg);
            self.cursor_x += 1;
            if self.cursor_x >= self.cols {
                self.newline();
            }
        }
        self.draw_cursor();
    }

    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            self.put_char(c);
        }
    }

    pub fn write_line(&mut self, s: &str) {
        self.write(s);
        self.put_char('\n');
    }

    pub fn cwrite(&mut self, s: &str, fg: u32, bg: u32) {
        let (old_fg, old_bg) = (self.fg, self.bg);
        self.fg = fg;
        self.bg = bg;
        self.write(s);
        self.fg = old_fg;
        self.bg = old_bg;
    }

    pub fn cwrite_line(&mut self, s: &str, fg: u32, bg: u32) {
        self.cwrite(s, fg, bg);
        self.put_char('\n');
    }

    pub fn newline(&mut self) {
        self.erase_cursor();
        self.cursor_x = 0;
        self.cursor_y += 1;
        if self.cursor_y >= self.text_rows() {
            self.scroll();
            self.cursor_y = self.text_rows() - 1;
        }
        self.draw_cursor();
    }

    pub fn backspace(&mut self) {
        if self.cursor_x > 0 {
            self.erase_cursor();
            self.cursor_x -= 1;
            let bg = self.bg;
            self.draw_glyph(self.cursor_x, self.cursor_y, ' ', bg);
            self.draw_cursor();
        }
    }

    fn scroll(&mut self) {
        let row_bytes = self.info.stride * self.info.bytes_per_pixel * CELL;
        let visible_bytes = self.text_rows() * CELL * self.info.stride * self.info.bytes_per_pixel;
        self.fb.copy_within(row_bytes..visible_bytes, 0);
        for b in &mut self.fb[visible_bytes - row_bytes..visible_bytes] {
            *b = 0;
        }
    }

    fn draw_cursor(&mut self) {
        let px = self.cursor_x * CELL;
        let py = self.cursor_y * CELL + (CELL - SCALE);
        self.fill_rect(px, py, CELL, SCALE, 0xFFFFFF);
    }

    fn erase_cursor(&mut self) {
        let px = self.cursor_x * CELL;
        let py = self.cursor_y * CELL + (CELL - SCALE);
        let bg = self.bg;
        self.fill_rect(px, py, CELL, SCALE, bg);
    }

    /// Paint a string at a fixed character cell without moving the cursor.
    pub fn draw_text_at_char(&mut self, pos: DrawPos, s: &str) {
        match pos {
            DrawPos::Char(x, y) => {
                self.erase_cursor();
                let fg = self.fg;
                let mut cx = x;
                for ch in s.chars() {
                    self.draw_glyph(cx, y, ch, fg);
                    cx += 1;
                }
                self.draw_cursor();
            }
        }
    }

    /// Rows at the bottom of the screen owned by the HUD; the scrolling text
    /// area never touches them.
    pub fn reserve_hud_rows(&mut self, rows: usize) {
        let rows = rows.min(self.rows);
        self.hud_rows = rows;
        if rows > 0 {
            let bytes = self.info.width * rows * CELL * self.info.bytes_per_pixel;
            self.hud_back = Some(vec![0u8; bytes]);
        } else {
            self.hud_back = None;
        }
    }

    fn text_rows(&self) -> usize {
        self.rows.saturating_sub(self.hud_rows)
    }

    /// Start a HUD frame: blank the backbuffer.
    pub fn hud_begin(&mut self) {
        let info = self.info;
        let bg = self.bg;
        let stride_px = info.width;
        let hud_h = self.hud_rows * CELL;
        if let Some(buf) = self.hud_back.as_mut() {
            for y in 0..hud_h {
                for x in 0..stride_px {
                    put_px(&info, buf, stride_px, x, y, bg);
                }
            }
        }
    }

    /// Draw one aligned run of text into the HUD backbuffer.
    pub fn hud_draw_text(&mut self, s: &str, fg: u32, align: HudAlign) {
        if self.hud_rows == 0 {
            return;
        }
        let info = self.info;
        let bg = self.bg;
        let stride_px = info.width;
        let hud_cols = info.width / CELL;
        let n = s.chars().count();
        let y_char = self.hud_rows - 1;
        let x_char = match align {
            HudAlign::Left => 0,
            HudAlign::Center => (hud_cols / 2).saturating_sub(n / 2),
            HudAlign::Right => hud_cols.saturating_sub(n),
        };
        if let Some(buf) = self.hud_back.as_mut() {
            let mut cx = x_char;
            for ch in s.chars() {
                draw_glyph_into(&info, buf, stride_px, cx, y_char, ch, fg, bg);
                cx += 1;
            }
        }
    }

    /// Blit the finished backbuffer onto the reserved rows in one pass, so a
    /// draw never shows a half-updated HUD.
    pub fn hud_present(&mut self) {
        if self.hud_rows == 0 {
            return;
        }
        let bpp = self.info.bytes_per_pixel;
        let stride_px = self.info.width;
        let hud_h = self.hud_rows * CELL;
        let dst_y0 = self.info.height - hud_h;
        if let Some(buf) = self.hud_back.as_ref() {
            for y in 0..hud_h {
                let src = &buf[y * stride_px * bpp..(y + 1) * stride_px * bpp];
                let dst_off = (dst_y0 + y) * self.info.stride * bpp;
                self.fb[dst_off..dst_off + src.len()].copy_from_slice(src);
            }
        }
    }

    pub fn clear_hud_row(&mut self) {
        self.hud_begin();
        self.hud_present();
    }
}

pub static CONSOLE: Mutex<Option<Console>> = Mutex::new(None);

pub fn init_console(boot: &'static mut BootInfo) {
    if let Some(console) = Console::from_boot_info(boot) {
        *CONSOLE.lock() = Some(console);
    }
}

pub fn with_console<F, R>(f: F) -> R
where
    F: FnOnce(&mut Console) -> R,
{
    interrupts::without_interrupts(|| {
        let mut lock = CONSOLE.lock();
        let con = lock.as_mut().expect("Console not init");
        f(con)
    })
}

/// Like `with_console` but a missing framebuffer is a no-op instead of a
/// panic. The HUD path uses this so a headless boot degrades silently.
pub fn try_with_console<F>(f: F)
where
    F: FnOnce(&mut Console),
{
    interrupts::without_interrupts(|| {
        let mut lock = CONSOLE.lock();
        if let Some(con) = lock.as_mut() {
            f(con);
        }
    });
}

pub fn write(s: &str) {
    with_console(|c| c.write(s));
}

pub fn write_line(s: &str) {
    with_console(|c| c.write_line(s));
}

pub fn cwrite_line(s: &str, fg: u32, bg: u32) {
    with_console(|c| c.cwrite_line(s, fg, bg));
}

pub fn clear_screen() {
    with_console(|c| c.clear());
}

pub fn size_chars() -> (usize, usize) {
    with_console(|c| c.size())
}
