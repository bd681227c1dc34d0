//! Core of the daycal calendar.
//!
//! - `activity`: timed activities and the drafts they are built from
//! - `recurrence`: repeat policies and how they project onto dates
//! - `store`: in-memory activity storage queried by date
//! - `overlap`: grouping of overlapping activities into layout slots
//! - `schedule`: a day's activities paired with their slots

pub mod activity;
pub mod agenda;
pub mod config;
pub mod demo;
pub mod error;
pub mod language;
pub mod overlap;
pub mod recurrence;
pub mod schedule;
pub mod store;
pub mod week;

pub use activity::{Activity, ActivityDraft, ActivityId, ClockTime};
pub use error::{DayCalError, DayCalResult};
pub use recurrence::Repeat;
pub use store::ActivityStore;
