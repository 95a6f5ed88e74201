use core::sync::atomic::{AtomicUsize, Ordering};

use clock::locale::{TableLocale, LOCALES};

// Index into LOCALES; slot 0 is en-US, the fallback the original used when
// no viewer language was available.
static ACTIVE: AtomicUsize = AtomicUsize::new(0);

pub fn current() -> &'static TableLocale {
    LOCALES[ACTIVE.load(Ordering::Relaxed) % LOCALES.len()]
}

/// Select a locale by tag, case-insensitive. Returns false when the tag is
/// not bundled; the active locale is left unchanged.
pub fn set(tag: &str) -> bool {
    for (i, l) in LOCALES.iter().enumerate() {
        if l.tag.eq_ignore_ascii_case(tag) {
            ACTIVE.store(i, Ordering::Relaxed);
            return true;
        }
    }
    false
}

pub fn tags() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|l| l.tag)
}
