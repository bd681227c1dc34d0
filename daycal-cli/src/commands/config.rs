use anyhow::Result;
use daycal_core::config::DayCalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DayCalConfig) -> Result<()> {
    let config_path = DayCalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!(
        "  Agenda:    {}",
        config
            .agenda_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".dimmed().to_string())
    );

    println!();
    println!("{}", "Settings".bold());
    println!("  Language:  {:?}", config.language);
    println!("  Demo:      {}", config.demo);
    println!("  Log level: {}", config.log_level);

    Ok(())
}
