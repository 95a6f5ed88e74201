//! Pure clock core: calendar math, HUD part formatting, locale tables,
//! region binding and redraw scheduling. Everything here is no_std and
//! hardware-free so the kernel stays a thin shell around it.

#![cfg_attr(not(test), no_std)]

pub mod datetime;
pub mod format;
pub mod locale;
pub mod region;
pub mod schedule;
