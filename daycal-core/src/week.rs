//! Week strip and day carousel navigation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The seven weekdays rotated so that `active` sits in the middle.
pub fn centered_week(active: Weekday) -> [Weekday; 7] {
    let mut day = active.pred().pred().pred();
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// The date within three days of `current` that falls on `target`.
///
/// A seven-day window centred on `current` contains every weekday exactly
/// once, so the result is unique.
pub fn closest_weekday(current: NaiveDate, target: Weekday) -> NaiveDate {
    let from = i64::from(current.weekday().num_days_from_monday());
    let to = i64::from(target.num_days_from_monday());
    let offset = (to - from + 3).rem_euclid(7) - 3;
    current + Duration::days(offset)
}

/// `days_shown` consecutive dates with `selected` in the middle.
pub fn carousel(selected: NaiveDate, days_shown: usize) -> Vec<NaiveDate> {
    let first = selected - Duration::days((days_shown / 2) as i64);
    first.iter_days().take(days_shown).collect()
}
