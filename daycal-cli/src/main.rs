mod commands;
mod dates;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use daycal_core::ActivityStore;
use daycal_core::agenda::Agenda;
use daycal_core::config::DayCalConfig;
use daycal_core::demo::seed_demo;

#[derive(Parser)]
#[command(name = "daycal")]
#[command(about = "Show your activities day by day, with overlapping ones side by side")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the activities come from.
#[derive(clap::Args)]
struct Source {
    /// Agenda file to load (overrides the configured one)
    #[arg(long)]
    agenda: Option<PathBuf>,

    /// Show sample activities around today
    #[arg(long)]
    demo: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the activities of one day
    Day {
        /// Date to show (YYYY-MM-DD, "today", "tomorrow", "fri"...)
        #[arg(short, long)]
        date: Option<String>,

        #[command(flatten)]
        source: Source,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the week around a date
    Week {
        /// Date in the middle of the week
        #[arg(short, long)]
        date: Option<String>,

        /// Jump to the closest day with this short weekday name instead
        #[arg(long)]
        weekday: Option<String>,

        #[command(flatten)]
        source: Source,
    },
    /// Validate an activity and list the days it would appear on
    Check {
        #[arg(short, long)]
        name: String,

        /// Date of the first occurrence
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        /// never, daily, weekly, monthly or yearly
        #[arg(short, long, default_value = "never")]
        repeat: String,

        /// How many days ahead to look
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Show config paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DayCalConfig::load().context("Could not load config")?;

    // Keep the handle alive so buffered log lines are flushed on exit.
    let _logger = logging::init(&config, cli.verbose)?;

    let today = Local::now().date_naive();

    match cli.command {
        Commands::Day { date, source, json } => {
            let date = dates::resolve(date.as_deref(), today)?;
            let store = load_store(&config, &source, today)?;
            commands::day::run(&store, date, &config, json)
        }
        Commands::Week {
            date,
            weekday,
            source,
        } => {
            let date = dates::resolve(date.as_deref(), today)?;
            let store = load_store(&config, &source, today)?;
            commands::week::run(&store, date, weekday.as_deref(), &config)
        }
        Commands::Check {
            name,
            date,
            start,
            end,
            repeat,
            days,
        } => {
            let date = dates::resolve(Some(&date), today)?;
            commands::check::run(name, date, &start, &end, &repeat, days, &config)
        }
        Commands::Config => commands::config::run(&config),
    }
}

/// Build the store from the agenda file, or demo data, or nothing.
fn load_store(config: &DayCalConfig, source: &Source, today: NaiveDate) -> Result<ActivityStore> {
    let agenda_path = source.agenda.clone().or_else(|| config.agenda_path());

    if let Some(path) = agenda_path {
        let store = Agenda::load(&path)
            .and_then(Agenda::into_store)
            .with_context(|| format!("Could not load agenda {}", path.display()))?;
        log::debug!("{} activities from {}", store.len(), path.display());
        return Ok(store);
    }

    let mut store = ActivityStore::new();
    if source.demo || config.demo {
        seed_demo(&mut store, today)?;
    } else {
        log::debug!("no agenda configured, starting empty");
    }
    Ok(store)
}
