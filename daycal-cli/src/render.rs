//! Terminal output for schedules.
//!
//! Formats schedule lines, slot markers and day headers, colored with
//! owo_colors.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use daycal_core::language::Language;
use daycal_core::overlap::Slot;
use daycal_core::schedule::ScheduledActivity;
use owo_colors::OwoColorize;

/// Colored one-line rendering of a core value.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Slot {
    /// `[2/3]` for the second of three overlapping activities, blank when
    /// the activity overlaps nothing.
    fn render(&self) -> String {
        if self.group_size <= 1 {
            return String::new();
        }
        format!("[{}/{}]", self.index + 1, self.group_size)
            .yellow()
            .to_string()
    }
}

/// One schedule line: marker, time frame, name, slot and repeat label.
pub fn render_entry(entry: &ScheduledActivity, language: Language, now: NaiveDateTime) -> String {
    let activity = &entry.activity;
    let time = activity.time_string();

    let mut line = if entry.is_ongoing(now) {
        format!("{} {}  {}", "●".green(), time.green(), activity.name().bold())
    } else if entry.has_past(now) {
        format!("  {}  {}", time.dimmed(), activity.name().dimmed())
    } else {
        format!("  {}  {}", time, activity.name())
    };

    let slot = entry.slot.render();
    if !slot.is_empty() {
        line.push_str("  ");
        line.push_str(&slot);
    }

    let repeat = activity.repeat();
    if repeat.is_repeating() {
        line.push_str("  ");
        line.push_str(&format!("({})", repeat.label(language)).dimmed().to_string());
    }

    format!("  {}", line)
}

/// Human-readable label for a date ("Today", "Tomorrow", "Fri 2026-03-20").
pub fn date_label(date: NaiveDate, today: NaiveDate, language: Language) -> String {
    let relative = match ((date - today).num_days(), language) {
        (0, Language::Swedish) => Some("Idag"),
        (1, Language::Swedish) => Some("Imorgon"),
        (0, Language::English) => Some("Today"),
        (1, Language::English) => Some("Tomorrow"),
        _ => None,
    };

    let absolute = format!(
        "{} {}",
        language.weekday_short(date.weekday()),
        date.format("%Y-%m-%d")
    );

    match relative {
        Some(label) => format!("{} ({})", label, absolute),
        None => absolute,
    }
}

/// Simple pluralization helper
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
