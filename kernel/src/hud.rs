use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use alloc::boxed::Box;
use clock::datetime::DateTime;
use clock::schedule::{ticks_until_next_second, TICK_HZ};
use heapless::{String as HString, Vec};
use spin::Mutex;
use x86_64::instructions::interrupts;

use crate::console::{try_with_console, HudAlign};
use crate::{time, timer};

/// One HUD display slot. `update` receives the instant the driver read for
/// this draw; every module on the row sees the same one.
pub trait HudModule {
    fn name(&self) -> &'static str;
    fn alignment(&self) -> HudAlign {
        HudAlign::Right
    }
    fn update(&mut self, now: &DateTime);
    fn render(&self) -> HString<64>;
}

static ENABLED: AtomicBool = AtomicBool::new(false);
static NEXT_DRAW: AtomicU64 = AtomicU64::new(u64::MAX);
static MODULES: Mutex<Vec<Box<dyn HudModule + Send>, 8>> = Mutex::new(Vec::new());

pub fn register(module: Box<dyn HudModule + Send>) {
    let mut mods = MODULES.lock();
    if mods.len() < mods.capacity() {
        mods.push(module).ok();
    }
}

/// Turn the clock on: one immediate draw, then recurring draws aligned to
/// the next wall-clock second boundary.
pub fn enable() {
    ENABLED.store(true, Ordering::Release);
    redraw();
    let now_ticks = timer::ticks();
    NEXT_DRAW.store(now_ticks + ticks_until_next_second(now_ticks, TICK_HZ), Ordering::Release);
}

pub fn disable() {
    ENABLED.store(false, Ordering::Release);
    NEXT_DRAW.store(u64::MAX, Ordering::Release);
    try_with_console(|c| c.clear_hud_row());
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Acquire)
}

/// Called from the timer interrupt on every tick. Draws exactly once per
/// second; each firing advances the deadline by one fixed period.
pub fn on_tick(now_ticks: u64) {
    if !ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let next = NEXT_DRAW.load(Ordering::Relaxed);
    if now_ticks >= next {
        NEXT_DRAW.store(next + TICK_HZ, Ordering::Relaxed);
        draw();
    }
}

/// Draw outside the tick cadence (first draw, locale change, time set).
pub fn redraw() {
    if !ENABLED.load(Ordering::Acquire) {
        return;
    }
    draw();
}

fn draw() {
    // The whole draw runs with interrupts off so a tick can never re-enter
    // the module list or the console mid-frame.
    interrupts::without_interrupts(|| {
        // One instant for all regions; without a wall clock the row is left
        // alone entirely.
        let now = match time::now() {
            Some(now) => now,
            None => return,
        };

        let mut left_buf = HString::<128>::new();
        let mut center_buf = HString::<128>::new();
        let mut right_buf = HString::<128>::new();

        let mut modules = MODULES.lock();
        for m in modules.iter_mut() {
            m.update(&now);
            let part = m.render();
            let buf = match m.alignment() {
                HudAlign::Left => &mut left_buf,
                HudAlign::Center => &mut center_buf,
                HudAlign::Right => &mut right_buf,
            };
            let _ = buf.push_str(&part);
        }

        try_with_console(|c| {
            let (fg, _) = c.default_colors();
            c.hud_begin();
            c.hud_draw_text(left_buf.as_str(), fg, HudAlign::Left);
            c.hud_draw_text(center_buf.as_str(), fg, HudAlign::Center);
            c.hud_draw_text(right_buf.as_str(), fg, HudAlign::Right);
            c.hud_present();
        });
    });
}
