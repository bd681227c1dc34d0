//! Sample activities around a given day.

use chrono::{Duration, NaiveDate};

use crate::activity::Activity;
use crate::error::DayCalResult;
use crate::store::ActivityStore;

/// (day offset from today, name, start, end)
type Sample = (i64, &'static str, (u32, u32), (u32, u32));

const SAMPLES: &[Sample] = &[
    (-3, "Work meeting", (9, 0), (10, 30)),
    (-3, "Cook dinner", (18, 30), (19, 30)),
    (-3, "Evening walk", (19, 0), (20, 0)),
    (-2, "Morning run", (6, 30), (7, 30)),
    (-2, "Team call", (10, 0), (11, 0)),
    (-2, "Lunch with a friend", (12, 0), (13, 30)),
    (-2, "Online course", (19, 0), (21, 0)),
    (-1, "Dentist", (9, 0), (10, 0)),
    (-1, "Gym", (10, 0), (11, 0)),
    (-1, "Coffee with a colleague", (15, 0), (16, 30)),
    (-1, "Movie night", (20, 0), (22, 30)),
    (0, "Breakfast", (8, 0), (8, 30)),
    (0, "Gym", (7, 30), (9, 0)),
    (0, "Lecture", (10, 0), (12, 0)),
    (0, "Call the clinic", (11, 30), (12, 0)),
    (1, "Run in the park", (6, 0), (7, 0)),
    (1, "Job interview", (9, 30), (10, 30)),
    (1, "Project work", (10, 0), (12, 0)),
    (1, "Family dinner", (18, 0), (20, 0)),
    (2, "Breakfast meeting", (8, 0), (9, 0)),
    (2, "Gym", (9, 0), (10, 0)),
    (2, "Long lunch", (12, 30), (14, 0)),
    (2, "Book club", (19, 0), (21, 0)),
    (3, "Sleep in", (9, 0), (10, 0)),
    (3, "Brunch with friends", (11, 0), (13, 0)),
    (3, "Padel", (14, 0), (15, 30)),
    (3, "Movie night", (20, 0), (22, 0)),
];

/// Fill `store` with sample activities from three days before `today` to
/// three days after. Returns how many were added.
pub fn seed_demo(store: &mut ActivityStore, today: NaiveDate) -> DayCalResult<usize> {
    for (offset, name, start, end) in SAMPLES {
        let date = today + Duration::days(*offset);
        store.add(Activity::new(*name, date, start.0, start.1, end.0, end.1)?);
    }
    log::debug!("seeded {} demo activities around {}", SAMPLES.len(), today);
    Ok(SAMPLES.len())
}
