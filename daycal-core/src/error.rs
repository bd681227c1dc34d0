//! Error types for daycal.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that can occur in daycal operations.
///
/// Lookups by id that miss are not errors: the store reports them as
/// `None` / `false` and callers treat them as no-ops.
#[derive(Error, Debug)]
pub enum DayCalError {
    #[error("End time must be after start time (start {start}, end {end})")]
    InvalidTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid repeat '{0}'. Expected never, daily, weekly, monthly or yearly")]
    InvalidRecurrenceToken(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidClockTime(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Agenda parse error: {0}")]
    AgendaParse(String),

    #[error("Agenda entry {index} ('{name}'): {source}")]
    AgendaEntry {
        index: usize,
        name: String,
        #[source]
        source: Box<DayCalError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for daycal operations.
pub type DayCalResult<T> = Result<T, DayCalError>;
