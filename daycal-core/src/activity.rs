//! Scheduled activities.
//!
//! An [`Activity`] is validated once, at construction, and never mutated
//! afterwards. Edits go through an [`ActivityDraft`] and produce a new value
//! that replaces the old one in the store.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DayCalError, DayCalResult};
use crate::recurrence::Repeat;

/// Globally unique activity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    pub fn new() -> Self {
        ActivityId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ActivityId {
    fn from(uuid: Uuid) -> Self {
        ActivityId(uuid)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Hour and minute as entered by the user.
///
/// Components are not range-checked. They are added to midnight of the
/// activity date, so `24:00` means midnight of the following day and `10:75`
/// means `11:15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        ClockTime { hour, minute }
    }

    /// Offset from midnight of `date`, as the clock time that produces it.
    fn since_midnight(date: NaiveDate, time: NaiveDateTime) -> Self {
        let minutes = (time - date.and_time(NaiveTime::MIN)).num_minutes().max(0);
        ClockTime::new((minutes / 60) as u32, (minutes % 60) as u32)
    }

    /// `None` when the offset runs past the last representable date.
    fn on(self, date: NaiveDate) -> Option<NaiveDateTime> {
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::hours(i64::from(self.hour)))?
            .checked_add_signed(Duration::minutes(i64::from(self.minute)))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = DayCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DayCalError::InvalidClockTime(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_number(hour) || !is_number(minute) {
            return Err(invalid());
        }

        Ok(ClockTime {
            hour: hour.parse().map_err(|_| invalid())?,
            minute: minute.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = DayCalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A calendar activity with a time range on its anchor date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    id: ActivityId,
    name: String,
    date: NaiveDate,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    repeat: Repeat,
}

impl Activity {
    /// Create a non-repeating activity with a fresh id.
    ///
    /// Fails with [`DayCalError::InvalidTimeRange`] unless the end lies
    /// strictly after the start.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> DayCalResult<Self> {
        Self::from_parts(
            name.into(),
            date,
            ClockTime::new(start_hour, start_minute),
            ClockTime::new(end_hour, end_minute),
            Repeat::Never,
            ActivityId::new(),
        )
    }

    fn from_parts(
        name: String,
        date: NaiveDate,
        start: ClockTime,
        end: ClockTime,
        repeat: Repeat,
        id: ActivityId,
    ) -> DayCalResult<Self> {
        let start_time = start
            .on(date)
            .ok_or_else(|| DayCalError::InvalidClockTime(start.to_string()))?;
        let end_time = end
            .on(date)
            .ok_or_else(|| DayCalError::InvalidClockTime(end.to_string()))?;

        if end_time <= start_time {
            return Err(DayCalError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }

        Ok(Activity {
            id,
            name,
            date,
            start_time,
            end_time,
            repeat,
        })
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// True if `now` lies within `[start, end]`, both ends included.
    pub fn is_ongoing(&self, now: NaiveDateTime) -> bool {
        self.start_time <= now && now <= self.end_time
    }

    pub fn has_past(&self, now: NaiveDateTime) -> bool {
        now >= self.end_time
    }

    /// True if the two time ranges intersect. Ranges that only touch
    /// (one ends exactly when the other starts) count as overlapping.
    pub fn overlaps(&self, other: &Activity) -> bool {
        !(self.end_time < other.start_time || self.start_time > other.end_time)
    }

    /// Whether this activity, or one of its repeats, falls on `date`.
    pub fn is_present_on(&self, date: NaiveDate) -> bool {
        self.repeat.projects_onto(self.date, date)
    }

    /// Time frame as `HH:MM-HH:MM`.
    pub fn time_string(&self) -> String {
        format!(
            "{:02}:{:02}-{:02}:{:02}",
            self.start_time.hour(),
            self.start_time.minute(),
            self.end_time.hour(),
            self.end_time.minute()
        )
    }

    /// This activity's occurrence on `date`: same id, name, clock times and
    /// repeat, anchored on `date`. Used to compare a repeat with the other
    /// activities of the day it is shown on.
    pub fn occurrence_on(&self, date: NaiveDate) -> DayCalResult<Activity> {
        let mut draft = self.to_draft();
        draft.date = date;
        draft.build_with_id(self.id)
    }

    /// A draft pre-filled with this activity's values, for editing.
    pub fn to_draft(&self) -> ActivityDraft {
        ActivityDraft {
            name: self.name.clone(),
            date: self.date,
            start: ClockTime::since_midnight(self.date, self.start_time),
            end: ClockTime::since_midnight(self.date, self.end_time),
            repeat: self.repeat,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity(name='{}', date={}, start={}, end={}, repeats={})",
            self.name, self.date, self.start_time, self.end_time, self.repeat
        )
    }
}

/// An unvalidated activity submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub name: String,
    pub date: NaiveDate,
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(default)]
    pub repeat: Repeat,
}

impl ActivityDraft {
    pub fn new(name: impl Into<String>, date: NaiveDate, start: ClockTime, end: ClockTime) -> Self {
        ActivityDraft {
            name: name.into(),
            date,
            start,
            end,
            repeat: Repeat::Never,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Validate into a new activity with a fresh id.
    pub fn build(self) -> DayCalResult<Activity> {
        self.build_with_id(ActivityId::new())
    }

    /// Validate into an activity that keeps an existing id. Used when an
    /// edit replaces a stored activity.
    pub fn build_with_id(self, id: ActivityId) -> DayCalResult<Activity> {
        Activity::from_parts(self.name, self.date, self.start, self.end, self.repeat, id)
    }
}
