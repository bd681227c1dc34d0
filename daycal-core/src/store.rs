//! In-memory activity storage.
//!
//! Activities are kept in insertion order and looked up by full scan. Only
//! the owner mutates the store; share it behind a lock if it must cross
//! threads.

use chrono::NaiveDate;
use log::debug;

use crate::activity::{Activity, ActivityId};

#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity. Overlapping activities are allowed.
    pub fn add(&mut self, activity: Activity) {
        debug!("add activity {} ({})", activity.id(), activity.name());
        self.activities.push(activity);
    }

    /// Activities present on `date`, in insertion order.
    pub fn activities_on(&self, date: NaiveDate) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| a.is_present_on(date))
            .cloned()
            .collect()
    }

    /// Replace the activity stored under `id`, keeping its position.
    ///
    /// Returns the stored replacement, or `None` if no activity has that id.
    pub fn update_by_id(&mut self, new_activity: Activity, id: ActivityId) -> Option<&Activity> {
        let Some(index) = self.activities.iter().position(|a| a.id() == id) else {
            debug!("update skipped, no activity {}", id);
            return None;
        };

        debug!("update activity {} at position {}", id, index);
        self.activities[index] = new_activity;
        Some(&self.activities[index])
    }

    /// Remove the activity with `id`. Returns whether one was removed.
    pub fn delete_by_id(&mut self, id: ActivityId) -> bool {
        match self.activities.iter().position(|a| a.id() == id) {
            Some(index) => {
                self.activities.remove(index);
                debug!("deleted activity {}", id);
                true
            }
            None => {
                debug!("delete skipped, no activity {}", id);
                false
            }
        }
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Extend<Activity> for ActivityStore {
    fn extend<I: IntoIterator<Item = Activity>>(&mut self, iter: I) {
        for activity in iter {
            self.add(activity);
        }
    }
}

impl FromIterator<Activity> for ActivityStore {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut store = ActivityStore::new();
        store.extend(iter);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityDraft, ClockTime};
    use crate::recurrence::Repeat;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn on(d: NaiveDate, name: &str, start: u32, end: u32) -> Activity {
        Activity::new(name, d, start, 0, end, 0).unwrap()
    }

    fn names(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.name()).collect()
    }

    #[test]
    fn add_then_query_returns_it_once() {
        let d = date(2026, 3, 20);
        let mut store = ActivityStore::new();
        let a = on(d, "standup", 9, 10);
        store.add(a.clone());

        let found = store.activities_on(d);
        assert_eq!(found, vec![a]);
        assert!(store.activities_on(date(2026, 3, 21)).is_empty());
    }

    #[test]
    fn query_keeps_insertion_order_not_time_order() {
        let d = date(2026, 3, 20);
        let store: ActivityStore = [on(d, "late", 15, 16), on(d, "early", 8, 9), on(d, "mid", 11, 12)]
            .into_iter()
            .collect();

        assert_eq!(names(&store.activities_on(d)), vec!["late", "early", "mid"]);
    }

    #[test]
    fn query_includes_repeats() {
        let d = date(2026, 3, 20);
        let mut store = ActivityStore::new();
        store.add(on(d, "once", 8, 9));
        store.add(
            ActivityDraft::new("daily", d, ClockTime::new(7, 0), ClockTime::new(7, 30))
                .repeat(Repeat::Daily)
                .build()
                .unwrap(),
        );

        assert_eq!(names(&store.activities_on(d)), vec!["once", "daily"]);
        assert_eq!(names(&store.activities_on(date(2026, 3, 25))), vec!["daily"]);
        assert!(store.activities_on(date(2026, 3, 19)).is_empty());
    }

    #[test]
    fn duplicates_and_overlaps_are_kept() {
        let d = date(2026, 3, 20);
        let a = on(d, "a", 9, 10);
        let mut store = ActivityStore::new();
        store.add(a.clone());
        store.add(a.clone());
        store.add(on(d, "b", 9, 11));
        assert_eq!(store.len(), 3);
        assert_eq!(store.activities_on(d).len(), 3);
    }

    #[test]
    fn update_replaces_in_place() {
        let d = date(2026, 3, 20);
        let first = on(d, "first", 8, 9);
        let second = on(d, "second", 10, 11);
        let third = on(d, "third", 12, 13);
        let mut store: ActivityStore = [first.clone(), second.clone(), third].into_iter().collect();

        let mut draft = second.to_draft();
        draft.name = "second (moved)".into();
        draft.start = ClockTime::new(14, 0);
        draft.end = ClockTime::new(15, 0);
        let edited = draft.build_with_id(second.id()).unwrap();

        let returned = store.update_by_id(edited.clone(), second.id()).cloned();
        assert_eq!(returned, Some(edited.clone()));
        assert_eq!(store.len(), 3);
        assert_eq!(
            names(&store.activities_on(d)),
            vec!["first", "second (moved)", "third"]
        );
        assert_eq!(store.get(second.id()), Some(&edited));
        assert_eq!(store.get(first.id()), Some(&first));
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let d = date(2026, 3, 20);
        let a = on(d, "a", 8, 9);
        let mut store: ActivityStore = [a.clone()].into_iter().collect();

        let stranger = on(d, "stranger", 10, 11);
        assert!(store.update_by_id(stranger.clone(), stranger.id()).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.activities_on(d), vec![a]);
    }

    #[test]
    fn delete_present_id() {
        let d = date(2026, 3, 20);
        let a = on(d, "a", 8, 9);
        let b = on(d, "b", 10, 11);
        let mut store: ActivityStore = [a.clone(), b.clone()].into_iter().collect();

        assert!(store.delete_by_id(a.id()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.activities_on(d), vec![b]);
        assert!(store.get(a.id()).is_none());
    }

    #[test]
    fn delete_absent_id() {
        let d = date(2026, 3, 20);
        let a = on(d, "a", 8, 9);
        let mut store: ActivityStore = [a.clone()].into_iter().collect();

        assert!(!store.delete_by_id(on(d, "other", 8, 9).id()));
        assert_eq!(store.len(), 1);

        assert!(store.delete_by_id(a.id()));
        assert!(!store.delete_by_id(a.id()));
        assert!(store.is_empty());
    }
}
