//! The three formatter operations behind the HUD regions. Pure functions of
//! a single instant; the driver computes all three from one read so the
//! regions never disagree.

use core::fmt::Write;

use crate::datetime::{DateTime, MS_PER_DAY, MS_PER_SECOND};
use crate::locale::Locale;

/// One formatted cell value. 24 bytes covers every bundled month/weekday
/// name after upper-casing.
pub type Part = heapless::String<24>;

pub fn pad2(value: u64) -> Part {
    let mut out = Part::new();
    let _ = write!(out, "{:02}", value);
    out
}

fn pad4(value: u64) -> Part {
    let mut out = Part::new();
    let _ = write!(out, "{:04}", value);
    out
}

fn upper(s: &str) -> Part {
    let mut out = Part::new();
    for ch in s.chars() {
        for up in ch.to_uppercase() {
            let _ = out.push(up);
        }
    }
    out
}

/// Time left until local midnight as (hh, mm, ss). The remainder is clamped
/// at zero and rounded up to whole seconds, so the countdown never shows a
/// stale zero before the boundary. At 00:00:00.000 exactly this yields
/// ("24","00","00") until the next draw; that edge is intentional.
pub fn remaining_time_parts(now: &DateTime) -> [Part; 3] {
    let elapsed_ms = now.elapsed_ms_today();
    let remaining_ms = MS_PER_DAY.saturating_sub(elapsed_ms);
    let remaining_secs = remaining_ms.div_ceil(MS_PER_SECOND);

    [
        pad2(remaining_secs / 3600),
        pad2((remaining_secs % 3600) / 60),
        pad2(remaining_secs % 60),
    ]
}

/// Upper-cased full month and weekday names, (MONTH, WEEKDAY).
pub fn day_month_parts(now: &DateTime, locale: &dyn Locale) -> [Part; 2] {
    [
        upper(locale.month_name(now.month)),
        upper(locale.weekday_name(now.weekday())),
    ]
}

/// (YYYY, MM, DD).
pub fn date_parts(now: &DateTime) -> [Part; 3] {
    [pad4(now.year), pad2(now.month), pad2(now.day)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::ymd_hms_to_secs;
    use crate::locale::{DE_DE, EN_US, FR_FR};

    fn at(y: u64, m: u64, d: u64, h: u64, min: u64, s: u64, ms: u64) -> DateTime {
        DateTime::from_epoch_secs_millis(ymd_hms_to_secs(y, m, d, h, min, s), ms)
    }

    #[test]
    fn countdown_rounds_up_at_the_boundary() {
        let now = at(2024, 3, 7, 23, 59, 59, 500);
        let parts = remaining_time_parts(&now);
        assert_eq!([parts[0].as_str(), parts[1].as_str(), parts[2].as_str()], ["00", "00", "01"]);
    }

    #[test]
    fn countdown_at_exact_midnight_shows_24() {
        let now = at(2024, 3, 7, 0, 0, 0, 0);
        let parts = remaining_time_parts(&now);
        assert_eq!([parts[0].as_str(), parts[1].as_str(), parts[2].as_str()], ["24", "00", "00"]);
    }

    #[test]
    fn countdown_mid_day() {
        // 18:15:30.000 -> 5h 44m 30s remain.
        let now = at(2024, 3, 7, 18, 15, 30, 0);
        let parts = remaining_time_parts(&now);
        assert_eq!([parts[0].as_str(), parts[1].as_str(), parts[2].as_str()], ["05", "44", "30"]);
    }

    #[test]
    fn countdown_sub_second_past_a_whole_second() {
        // 1 ms past 12:00:00 still rounds up to the same second count shown
        // at 12:00:00 minus one: 11:59:60 -> 12:00:00 ceil.
        let now = at(2024, 3, 7, 12, 0, 0, 1);
        let parts = remaining_time_parts(&now);
        assert_eq!([parts[0].as_str(), parts[1].as_str(), parts[2].as_str()], ["12", "00", "00"]);
    }

    #[test]
    fn date_parts_pad() {
        let now = at(2024, 3, 7, 10, 30, 0, 0);
        let parts = date_parts(&now);
        assert_eq!([parts[0].as_str(), parts[1].as_str(), parts[2].as_str()], ["2024", "03", "07"]);
    }

    #[test]
    fn day_month_upper_cases_en() {
        let now = at(2024, 3, 7, 10, 30, 0, 0);
        let parts = day_month_parts(&now, &EN_US);
        assert_eq!([parts[0].as_str(), parts[1].as_str()], ["MARCH", "THURSDAY"]);
    }

    #[test]
    fn day_month_upper_cases_non_ascii() {
        let now = at(2024, 3, 7, 10, 30, 0, 0);
        let parts = day_month_parts(&now, &DE_DE);
        assert_eq!([parts[0].as_str(), parts[1].as_str()], ["MÄRZ", "DONNERSTAG"]);

        let now = at(2024, 8, 4, 10, 30, 0, 0);
        let parts = day_month_parts(&now, &FR_FR);
        assert_eq!([parts[0].as_str(), parts[1].as_str()], ["AOÛT", "DIMANCHE"]);
    }
}
