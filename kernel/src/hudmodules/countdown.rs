use alloc::boxed::Box;
use clock::datetime::DateTime;
use clock::format::remaining_time_parts;
use clock::region::{bind_region, Region};
use heapless::String as HString;

use crate::console::HudAlign;
use crate::hud::{register, HudModule};

/// Time left until local midnight, hh:mm:ss.
pub struct Countdown {
    region: Region,
}

impl Countdown {
    fn new() -> Self {
        let mut region = Region::new();
        region.ensure_shape(3);
        Self { region }
    }
}

impl HudModule for Countdown {
    fn name(&self) -> &'static str {
        "countdown"
    }

    fn alignment(&self) -> HudAlign {
        HudAlign::Right
    }

    fn update(&mut self, now: &DateTime) {
        let parts = remaining_time_parts(now);
        bind_region(Some(&mut self.region), 3).apply(&[
            parts[0].as_str(),
            parts[1].as_str(),
            parts[2].as_str(),
        ]);
    }

    fn render(&self) -> HString<64> {
        let mut out = HString::new();
        self.region.render_into(&mut out);
        out
    }
}

pub fn init() {
    register(Box::new(Countdown::new()));
}
