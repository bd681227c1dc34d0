use anyhow::Result;
use chrono::{Duration, NaiveDate};
use daycal_core::config::DayCalConfig;
use daycal_core::{ActivityDraft, ClockTime, DayCalError, Repeat};
use owo_colors::OwoColorize;

pub fn run(
    name: String,
    date: NaiveDate,
    start: &str,
    end: &str,
    repeat: &str,
    days: u32,
    config: &DayCalConfig,
) -> Result<()> {
    let start: ClockTime = start.parse()?;
    let end: ClockTime = end.parse()?;
    let repeat: Repeat = repeat.parse()?;

    let activity = match ActivityDraft::new(name, date, start, end).repeat(repeat).build() {
        Ok(activity) => activity,
        Err(DayCalError::InvalidTimeRange { .. }) => {
            anyhow::bail!("End time must be after start time ({} - {})", start, end)
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} {}  {}  {} min  ({})",
        "✓".green(),
        activity.name().bold(),
        activity.time_string(),
        activity.duration_minutes(),
        activity.repeat().label(config.language)
    );

    let occurrences = upcoming(date, days, |d| activity.is_present_on(d));

    if occurrences.is_empty() {
        println!("{}", "  No occurrences in range".dimmed());
        return Ok(());
    }

    for day in occurrences {
        println!("  {}", day.format("%Y-%m-%d (%a)"));
    }

    Ok(())
}

/// Dates in `[from, from + days)` accepted by `present`.
fn upcoming(from: NaiveDate, days: u32, present: impl Fn(NaiveDate) -> bool) -> Vec<NaiveDate> {
    (0..i64::from(days))
        .map(|offset| from + Duration::days(offset))
        .filter(|d| present(*d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycal_core::Activity;

    #[test]
    fn upcoming_lists_weekly_dates() {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let weekly = ActivityDraft::new("gym", anchor, ClockTime::new(9, 0), ClockTime::new(10, 0))
            .repeat(Repeat::Weekly)
            .build()
            .unwrap();

        let dates = upcoming(anchor, 15, |d| weekly.is_present_on(d));
        assert_eq!(
            dates,
            vec![
                anchor,
                anchor + Duration::days(7),
                anchor + Duration::days(14)
            ]
        );
    }

    #[test]
    fn upcoming_one_off() {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let once = Activity::new("once", anchor, 9, 0, 10, 0).unwrap();
        assert_eq!(upcoming(anchor, 30, |d| once.is_present_on(d)), vec![anchor]);
        assert!(upcoming(anchor, 0, |d| once.is_present_on(d)).is_empty());
    }

    #[test]
    fn rejects_reversed_range() {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let err = run(
            "bad".into(),
            anchor,
            "10:00",
            "09:00",
            "never",
            7,
            &DayCalConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("End time must be after start time"));
    }

    #[test]
    fn rejects_unknown_repeat() {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let err = run(
            "bad".into(),
            anchor,
            "09:00",
            "10:00",
            "biweekly",
            7,
            &DayCalConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("biweekly"));
    }
}
