use chrono::{Duration, NaiveDate};
use daycal_core::overlap::{Slot, group_overlapping, overlap_data};
use daycal_core::schedule::DaySchedule;
use daycal_core::{Activity, ActivityDraft, ActivityStore, ClockTime, DayCalError, Repeat};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn weekly(name: &str, anchor: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Activity {
    ActivityDraft::new(
        name,
        anchor,
        ClockTime::new(start.0, start.1),
        ClockTime::new(end.0, end.1),
    )
    .repeat(Repeat::Weekly)
    .build()
    .unwrap()
}

#[test]
fn query_group_and_slot_a_day() {
    let d = date(2026, 3, 20);
    let mut store = ActivityStore::new();
    store.add(Activity::new("A", d, 9, 0, 10, 0).unwrap());
    store.add(Activity::new("B", d, 9, 30, 10, 30).unwrap());
    store.add(Activity::new("C", d, 11, 0, 12, 0).unwrap());

    let day = store.activities_on(d);
    let groups = group_overlapping(&day);
    assert_eq!(groups.len(), 2);

    let slots: Vec<Slot> = day.iter().map(|a| overlap_data(a, &groups)).collect();
    assert_eq!(
        slots,
        vec![
            Slot { group_size: 2, index: 0 },
            Slot { group_size: 2, index: 1 },
            Slot { group_size: 1, index: 0 },
        ]
    );
}

#[test]
fn weekly_repeat_overlaps_a_one_off_on_later_weeks() {
    let anchor = date(2026, 3, 16);
    let mut store = ActivityStore::new();
    store.add(weekly("Planning", anchor, (10, 0), (11, 0)));

    let two_weeks_on = anchor + Duration::days(14);
    store.add(Activity::new("Dentist", two_weeks_on, 10, 30, 11, 30).unwrap());

    // On the anchor week only the repeat is present.
    assert_eq!(DaySchedule::for_date(&store, anchor).len(), 1);
    assert!(DaySchedule::for_date(&store, anchor + Duration::days(3)).is_empty());
    assert!(DaySchedule::for_date(&store, anchor - Duration::days(7)).is_empty());

    // The repeat is compared at its time of day on the shown date.
    let schedule = DaySchedule::for_date(&store, two_weeks_on);
    let slots: Vec<(usize, usize)> = schedule.entries.iter().map(|e| e.slot.into()).collect();
    assert_eq!(slots, vec![(2, 0), (2, 1)]);

    // A week later the one-off is gone and the repeat stands alone.
    let schedule = DaySchedule::for_date(&store, two_weeks_on + Duration::days(7));
    let slots: Vec<(usize, usize)> = schedule.entries.iter().map(|e| e.slot.into()).collect();
    assert_eq!(slots, vec![(1, 0)]);
}

#[test]
fn edit_then_delete_lifecycle() {
    let d = date(2026, 3, 20);
    let mut store = ActivityStore::new();
    let lunch = Activity::new("Lunch", d, 12, 0, 13, 0).unwrap();
    let walk = Activity::new("Walk", d, 13, 0, 14, 0).unwrap();
    store.add(lunch.clone());
    store.add(walk.clone());

    // Rejected edit leaves the store untouched.
    let mut bad = lunch.to_draft();
    bad.end = ClockTime::new(11, 0);
    assert!(matches!(
        bad.build_with_id(lunch.id()),
        Err(DayCalError::InvalidTimeRange { .. })
    ));
    assert_eq!(store.get(lunch.id()), Some(&lunch));

    // Accepted edit moves lunch to a repeating slot.
    let mut good = lunch.to_draft();
    good.repeat = Repeat::Daily;
    let edited = good.build_with_id(lunch.id()).unwrap();
    assert!(store.update_by_id(edited, lunch.id()).is_some());
    assert_eq!(store.len(), 2);
    assert_eq!(store.activities_on(d + Duration::days(1)).len(), 1);

    assert!(store.delete_by_id(walk.id()));
    assert!(!store.delete_by_id(walk.id()));
    assert_eq!(store.len(), 1);
}
