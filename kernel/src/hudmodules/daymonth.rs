use alloc::boxed::Box;
use clock::datetime::DateTime;
use clock::format::day_month_parts;
use clock::region::{bind_region, Region};
use heapless::String as HString;

use crate::console::HudAlign;
use crate::hud::{register, HudModule};
use crate::lang;

/// Upper-cased month and weekday names in the active locale.
pub struct DayMonth {
    region: Region,
}

impl DayMonth {
    fn new() -> Self {
        let mut region = Region::new();
        region.ensure_shape(2);
        Self { region }
    }
}

impl HudModule for DayMonth {
    fn name(&self) -> &'static str {
        "daymonth"
    }

    fn alignment(&self) -> HudAlign {
        HudAlign::Center
    }

    fn update(&mut self, now: &DateTime) {
        let parts = day_month_parts(now, lang::current());
        bind_region(Some(&mut self.region), 2)
            .apply(&[parts[0].as_str(), parts[1].as_str()]);
    }

    fn render(&self) -> HString<64> {
        let mut out = HString::new();
        self.region.render_into(&mut out);
        out
    }
}

pub fn init() {
    register(Box::new(DayMonth::new()));
}
