use anyhow::Result;
use chrono::NaiveDate;

/// Resolve a date argument. `None` means today.
///
/// Accepts `YYYY-MM-DD` or natural language ("tomorrow", "next friday",
/// "mar 20").
pub fn resolve(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    let Some(input) = input else {
        return Ok(today);
    };

    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(dt.date())
}

/// Expand short names into the full English names fuzzydate understands.
///
/// Covers the weekday labels `daycal week` prints in both languages, so a
/// day read off the strip can be passed straight back to `--date`.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mån", "monday"),
        ("tis", "tuesday"),
        ("ons", "wednesday"),
        ("tor", "thursday"),
        ("tors", "thursday"),
        ("fre", "friday"),
        ("lör", "saturday"),
        ("sön", "sunday"),
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let lower = input.to_lowercase();
    lower
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
