//! A day's activities with their layout slots.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::activity::Activity;
use crate::overlap::{Slot, group_overlapping};
use crate::store::ActivityStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledActivity {
    pub activity: Activity,
    pub slot: Slot,
    /// Start of the occurrence on the schedule's date. Differs from the
    /// activity's stored start when a repeat is shown on a later date.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduledActivity {
    pub fn is_ongoing(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn has_past(&self, now: NaiveDateTime) -> bool {
        now >= self.end
    }
}

/// Everything on one date, in store order, each entry carrying its slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub entries: Vec<ScheduledActivity>,
}

impl DaySchedule {
    pub fn for_date(store: &ActivityStore, date: NaiveDate) -> Self {
        Self::from_activities(date, store.activities_on(date))
    }

    /// Build from activities already filtered to `date`.
    ///
    /// Overlaps are found between the occurrences on `date`, so a repeat
    /// anchored on an earlier day still shares columns with the day's
    /// one-off activities.
    pub fn from_activities(date: NaiveDate, activities: Vec<Activity>) -> Self {
        let occurrences: Vec<Activity> = activities
            .iter()
            .map(|activity| {
                activity.occurrence_on(date).unwrap_or_else(|e| {
                    log::warn!("keeping stored times for '{}': {}", activity.name(), e);
                    activity.clone()
                })
            })
            .collect();
        let groups = group_overlapping(&occurrences);

        let entries = activities
            .into_iter()
            .zip(occurrences)
            .map(|(activity, occurrence)| ScheduledActivity {
                slot: groups.overlap_data(&occurrence),
                start: occurrence.start_time(),
                end: occurrence.end_time(),
                activity,
            })
            .collect();

        DaySchedule { date, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries whose occurrence contains `now`, so a repeating activity
    /// counts as ongoing on any day it projects onto.
    pub fn ongoing(&self, now: NaiveDateTime) -> impl Iterator<Item = &ScheduledActivity> {
        self.entries.iter().filter(move |entry| entry.is_ongoing(now))
    }
}
