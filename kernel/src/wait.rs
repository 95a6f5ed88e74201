#![allow(dead_code)]

use x86_64::instructions::hlt;

use crate::timer;

/// Block for whole seconds, sleeping between ticks.
pub fn bsec(seconds: u64) {
    bms(seconds * 1000);
}

/// Block for `ms` milliseconds, sleeping between ticks.
pub fn bms(ms: u64) {
    let start = timer::ticks();
    let ticks = (ms * timer::frequency()) / 1000;
    while timer::ticks() - start < ticks {
        hlt();
    }
}
