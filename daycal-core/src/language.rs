//! Display language for user-facing labels.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{DayCalError, DayCalResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "sv")]
    Swedish,
    #[serde(alias = "en")]
    English,
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const SWEDISH_WEEKDAYS: [&str; 7] = ["Mån", "Tis", "Ons", "Tor", "Fre", "Lör", "Sön"];
const ENGLISH_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl Language {
    fn weekday_names(self) -> &'static [&'static str; 7] {
        match self {
            Language::Swedish => &SWEDISH_WEEKDAYS,
            Language::English => &ENGLISH_WEEKDAYS,
        }
    }

    /// Short weekday name, e.g. "Mån" or "Mon".
    pub fn weekday_short(self, weekday: Weekday) -> &'static str {
        self.weekday_names()[weekday.num_days_from_monday() as usize]
    }

    /// Map a short weekday name back to a `Weekday`.
    ///
    /// Matching is exact (case-sensitive) against the names produced by
    /// [`Language::weekday_short`]. Swedish also accepts "Tors" for Thursday.
    pub fn parse_weekday(self, text: &str) -> DayCalResult<Weekday> {
        if self == Language::Swedish && text == "Tors" {
            return Ok(Weekday::Thu);
        }

        self.weekday_names()
            .iter()
            .position(|name| *name == text)
            .map(|idx| WEEK[idx])
            .ok_or_else(|| DayCalError::InvalidWeekday(text.to_string()))
    }
}
