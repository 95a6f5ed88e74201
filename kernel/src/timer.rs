use core::sync::atomic::{AtomicU64, Ordering};

use x86_64::instructions::port::Port;
use x86_64::structures::idt::InterruptStackFrame;

use crate::hud;

const PIT_FREQUENCY: u32 = 1193182;
const DESIRED_FREQUENCY: u32 = clock::schedule::TICK_HZ as u32;
const PIT_COMMAND_PORT: u16 = 0x43;
const PIT_CHANNEL0_PORT: u16 = 0x40;

static TICKS: AtomicU64 = AtomicU64::new(0);

pub fn init_pit() {
    let divisor: u16 = (PIT_FREQUENCY / DESIRED_FREQUENCY) as u16;

    unsafe {
        let mut cmd: Port<u8> = Port::new(PIT_COMMAND_PORT);
        let mut data: Port<u8> = Port::new(PIT_CHANNEL0_PORT);

        cmd.write(0x36);

        data.write((divisor & 0xFF) as u8);
        data.write((divisor >> 8) as u8);
    }
}

pub fn ticks() -> u64 {
    TICKS.load(Ordering::Relaxed)
}

pub fn frequency() -> u64 {
    DESIRED_FREQUENCY as u64
}

pub extern "x86-interrupt" fn timer_interrupt_handler(_stack_frame: InterruptStackFrame) {
    let now = TICKS.fetch_add(1, Ordering::Relaxed) + 1;
    hud::on_tick(now);

    unsafe {
        let mut port = Port::<u8>::new(0x20);
        port.write(0x20); // EOI
    }
}
