//! Repeat policies for activities.
//!
//! An activity stores a single occurrence anchored on its date. The repeat
//! policy decides which other dates that occurrence projects onto. Nothing is
//! ever expanded into a list of instances; every query is answered by
//! comparing the anchor with the query date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DayCalError;
use crate::language::Language;

/// How often an activity repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    Never,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Repeat {
    pub const ALL: [Repeat; 5] = [
        Repeat::Never,
        Repeat::Daily,
        Repeat::Weekly,
        Repeat::Monthly,
        Repeat::Yearly,
    ];

    /// Whether an occurrence anchored on `anchor` appears on `query`.
    ///
    /// The anchor date itself always matches. Otherwise no policy reaches
    /// backwards, and:
    /// - `Monthly` matches the same day-of-month only, so an anchor on the
    ///   31st skips every shorter month.
    /// - `Yearly` matches the same ordinal day-of-year, so after February in
    ///   a leap year it lands one calendar day earlier than the anchor.
    pub fn projects_onto(self, anchor: NaiveDate, query: NaiveDate) -> bool {
        if query == anchor {
            return true;
        }

        match self {
            Repeat::Never => false,
            Repeat::Daily => query >= anchor,
            Repeat::Weekly => query >= anchor && (query - anchor).num_days() % 7 == 0,
            Repeat::Monthly => query >= anchor && query.day() == anchor.day(),
            Repeat::Yearly => query >= anchor && query.ordinal() == anchor.ordinal(),
        }
    }

    pub fn is_repeating(self) -> bool {
        self != Repeat::Never
    }

    /// Lowercase token used in agenda files and on the command line.
    pub fn token(self) -> &'static str {
        match self {
            Repeat::Never => "never",
            Repeat::Daily => "daily",
            Repeat::Weekly => "weekly",
            Repeat::Monthly => "monthly",
            Repeat::Yearly => "yearly",
        }
    }

    /// User-facing label.
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Swedish, Repeat::Never) => "Aldrig",
            (Language::Swedish, Repeat::Daily) => "Dagligen",
            (Language::Swedish, Repeat::Weekly) => "Varje vecka",
            (Language::Swedish, Repeat::Monthly) => "Varje månad",
            (Language::Swedish, Repeat::Yearly) => "Årligen",
            (Language::English, Repeat::Never) => "Never",
            (Language::English, Repeat::Daily) => "Daily",
            (Language::English, Repeat::Weekly) => "Weekly",
            (Language::English, Repeat::Monthly) => "Monthly",
            (Language::English, Repeat::Yearly) => "Yearly",
        }
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Repeat {
    type Err = DayCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Repeat::ALL
            .into_iter()
            .find(|r| r.token() == token)
            .ok_or_else(|| DayCalError::InvalidRecurrenceToken(s.to_string()))
    }
}
