use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use daycal_core::ActivityStore;
use daycal_core::config::DayCalConfig;
use daycal_core::week::{carousel, centered_week, closest_weekday};
use owo_colors::OwoColorize;

use crate::render::pluralize;

const DAYS_SHOWN: usize = 7;

pub fn run(
    store: &ActivityStore,
    date: NaiveDate,
    weekday: Option<&str>,
    config: &DayCalConfig,
) -> Result<()> {
    let language = config.language;

    let active = match weekday {
        Some(name) => closest_weekday(date, language.parse_weekday(name)?),
        None => date,
    };

    let strip: Vec<String> = centered_week(active.weekday())
        .into_iter()
        .map(|day| {
            let name = language.weekday_short(day);
            if day == active.weekday() {
                name.reversed().to_string()
            } else {
                name.to_string()
            }
        })
        .collect();
    println!("  {}", strip.join("  "));
    println!();

    let today = Local::now().date_naive();

    for day in carousel(active, DAYS_SHOWN) {
        let count = store.activities_on(day).len();
        let label = format!(
            "{} {:>2}",
            language.weekday_short(day.weekday()),
            day.day()
        );
        let summary = format!("{} {}", count, pluralize(count, "activity", "activities"));

        let marker = if day == today { "•" } else { " " };

        if day == active {
            println!("{} {}  {}", marker, label.bold(), summary.bold());
        } else if count == 0 {
            println!("{} {}  {}", marker, label, summary.dimmed());
        } else {
            println!("{} {}  {}", marker, label, summary);
        }
    }

    Ok(())
}
