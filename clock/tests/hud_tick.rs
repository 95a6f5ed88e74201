//! End-to-end shape of one HUD draw: a single instant feeds all three
//! regions, exactly one write per region.

use clock::datetime::{ymd_hms_to_secs, DateTime};
use clock::format::{date_parts, day_month_parts, remaining_time_parts};
use clock::locale::EN_US;
use clock::region::{bind_region, Region};

fn render(region: &Region) -> String {
    let mut out = heapless::String::<64>::new();
    region.render_into(&mut out);
    out.as_str().to_owned()
}

#[test]
fn one_tick_updates_all_three_regions_from_one_instant() {
    let mut countdown = Region::new();
    let mut daymonth = Region::new();
    let mut date = Region::new();

    // 2024-03-07 18:15:30.000 local.
    let now = DateTime::from_epoch_secs(ymd_hms_to_secs(2024, 3, 7, 18, 15, 30));

    let time_parts = remaining_time_parts(&now);
    let dm_parts = day_month_parts(&now, &EN_US);
    let d_parts = date_parts(&now);

    bind_region(Some(&mut countdown), 3)
        .apply(&[time_parts[0].as_str(), time_parts[1].as_str(), time_parts[2].as_str()]);
    bind_region(Some(&mut daymonth), 2).apply(&[dm_parts[0].as_str(), dm_parts[1].as_str()]);
    bind_region(Some(&mut date), 3).apply(&[d_parts[0].as_str(), d_parts[1].as_str(), d_parts[2].as_str()]);

    assert_eq!(render(&countdown), "05:44:30");
    assert_eq!(render(&daymonth), "MARCH:THURSDAY");
    assert_eq!(render(&date), "2024:03:07");
}

#[test]
fn successive_ticks_reuse_the_bound_structure() {
    let mut countdown = Region::new();

    let first = DateTime::from_epoch_secs(ymd_hms_to_secs(2024, 3, 7, 23, 59, 58));
    let parts = remaining_time_parts(&first);
    bind_region(Some(&mut countdown), 3).apply(&[parts[0].as_str(), parts[1].as_str(), parts[2].as_str()]);
    assert_eq!(render(&countdown), "00:00:02");

    let second = DateTime::from_epoch_secs(ymd_hms_to_secs(2024, 3, 7, 23, 59, 59));
    let parts = remaining_time_parts(&second);
    bind_region(Some(&mut countdown), 3).apply(&[parts[0].as_str(), parts[1].as_str(), parts[2].as_str()]);
    assert_eq!(render(&countdown), "00:00:01");
    assert_eq!(countdown.part_count(), 3);
    assert_eq!(countdown.separator_count(), 2);
}

#[test]
fn midnight_rollover_across_two_ticks() {
    let mut countdown = Region::new();

    let midnight = DateTime::from_epoch_secs(ymd_hms_to_secs(2024, 3, 8, 0, 0, 0));
    let parts = remaining_time_parts(&midnight);
    bind_region(Some(&mut countdown), 3).apply(&[parts[0].as_str(), parts[1].as_str(), parts[2].as_str()]);
    assert_eq!(render(&countdown), "24:00:00");

    let next = DateTime::from_epoch_secs(ymd_hms_to_secs(2024, 3, 8, 0, 0, 1));
    let parts = remaining_time_parts(&next);
    bind_region(Some(&mut countdown), 3).apply(&[parts[0].as_str(), parts[1].as_str(), parts[2].as_str()]);
    assert_eq!(render(&countdown), "23:59:59");
}
