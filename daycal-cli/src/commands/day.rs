use anyhow::Result;
use chrono::{Local, NaiveDate};
use daycal_core::ActivityStore;
use daycal_core::config::DayCalConfig;
use daycal_core::schedule::DaySchedule;
use owo_colors::OwoColorize;

use crate::render::{date_label, render_entry};

pub fn run(store: &ActivityStore, date: NaiveDate, config: &DayCalConfig, json: bool) -> Result<()> {
    let schedule = DaySchedule::for_date(store, date);

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    let now = Local::now().naive_local();
    let today = now.date();

    println!("{}", date_label(date, today, config.language).bold());

    if schedule.is_empty() {
        println!("{}", "  No activities".dimmed());
        return Ok(());
    }

    for entry in &schedule.entries {
        println!("{}", render_entry(entry, config.language, now));
    }

    Ok(())
}
