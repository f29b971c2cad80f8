// recurview - print the occurrences a calendar view would show
// Reads a JSON array of stored events and writes the expanded list as JSON

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

use recurview::config::load_settings;
use recurview::utils::logging::{init_logging, log_error_with_context};
use recurview::{AppError, Event, OccurrenceQuery, ViewGranularity};

#[derive(Debug, Parser)]
#[command(
    name = "recurview",
    version,
    about = "Expand recurring calendar events for a week or month view"
)]
struct Cli {
    /// JSON file holding an array of events
    events: PathBuf,

    /// Any date inside the view, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// week or month (defaults to the configured view)
    #[arg(short, long)]
    view: Option<ViewGranularity>,

    /// Only events whose title, description or location contain this text
    #[arg(short, long, default_value = "")]
    search: String,

    /// Path to the settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn read_events(path: &Path) -> Result<Vec<Event>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;
    Ok(events)
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;
    let events = read_events(&cli.events)?;
    info!("Loaded {} events from {}", events.len(), cli.events.display());

    let reference = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let query = OccurrenceQuery::from_settings(&settings, cli.search, reference, cli.view);
    let occurrences = query.run(&events);
    info!(
        "{} occurrences in the {} of {}",
        occurrences.len(),
        query.view,
        reference
    );

    println!("{}", serde_json::to_string_pretty(&occurrences)?);
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log_error_with_context(&e, "recurview");
        match e.downcast_ref::<AppError>() {
            Some(app_err) => error!("{}", app_err.to_safe_string()),
            None => error!("Exiting with failure"),
        }
        std::process::exit(1);
    }
}
