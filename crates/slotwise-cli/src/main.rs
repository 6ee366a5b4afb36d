//! `slotwise` CLI — compute bookable appointment slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compute slots for a week
//! slotwise slots --config config.json --start 2026-03-02 --end 2026-03-06 --timezone Europe/Madrid
//!
//! # Cross-reference busy intervals exported from a calendar
//! slotwise slots --config config.json --busy busy.json \
//!     --start 2026-03-02 --end 2026-03-06 --timezone Europe/Madrid
//!
//! # Validate a config document
//! slotwise validate --config config.json
//!
//! # Print a starter configuration
//! slotwise sample-config > config.json
//! ```

use std::fs;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use slotwise_engine::{
    compute_slots, day_window, interval, AvailabilityConfig, BusyInterval, ConfigStore,
    JsonFileStore, SlotList, SlotwiseError,
};

#[derive(Parser)]
#[command(
    name = "slotwise",
    version,
    about = "Appointment-slot computation from weekly availability rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute available slots over a date range
    Slots {
        /// Availability config document (JSON)
        #[arg(short, long)]
        config: String,
        /// Busy intervals exported from a calendar (JSON array). Omitting
        /// this means an explicitly empty busy list, not "unknown".
        #[arg(short, long)]
        busy: Option<String>,
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// IANA timezone the slots are computed and rendered in
        #[arg(short, long)]
        timezone: String,
    },
    /// Validate a config document without computing anything
    Validate {
        /// Availability config document (JSON)
        #[arg(short, long)]
        config: String,
    },
    /// Print a starter availability configuration
    SampleConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Slots {
            config,
            busy,
            start,
            end,
            timezone,
        } => run_slots(&config, busy.as_deref(), start, end, &timezone),
        Commands::Validate { config } => run_validate(&config),
        Commands::SampleConfig => run_sample_config(),
    }
}

fn run_slots(
    config_path: &str,
    busy_path: Option<&str>,
    start: NaiveDate,
    end: NaiveDate,
    timezone: &str,
) -> Result<()> {
    let store = JsonFileStore::new(config_path);
    let config = store
        .read()
        .with_context(|| format!("failed to read config from {config_path}"))?
        .ok_or(SlotwiseError::ConfigurationMissing)?;

    let busy = match busy_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read busy intervals from {path}"))?;
            let intervals: Vec<BusyInterval> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse busy intervals from {path}"))?;
            // Clip and merge against the queried window before computing.
            let (time_min, time_max) = day_window(start, end, timezone)?;
            interval::normalize(&intervals, time_min, time_max)
        }
        None => Vec::new(),
    };

    let slots = compute_slots(&config, start, end, timezone, &busy)?;
    let out = SlotList {
        available_slots: slots,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run_validate(config_path: &str) -> Result<()> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config from {config_path}"))?;
    let config: AvailabilityConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config from {config_path}"))?;
    config.validate()?;

    let available_days = config.rules.iter().filter(|r| r.is_available).count();
    println!(
        "{config_path}: ok ({available_days} available weekday(s), {} break(s), {}-minute slots)",
        config.breaks.len(),
        config.appointment_duration_minutes
    );
    Ok(())
}

/// Weekday schedule with a lunch break, the shape most owners start from.
const SAMPLE_CONFIG: &str = r#"{
  "rules": [
    { "day_of_week": 0, "work_hours": [ { "start": "09:00:00", "end": "17:00:00" } ] },
    { "day_of_week": 1, "work_hours": [ { "start": "09:00:00", "end": "17:00:00" } ] },
    { "day_of_week": 2, "work_hours": [ { "start": "09:00:00", "end": "17:00:00" } ] },
    { "day_of_week": 3, "work_hours": [ { "start": "09:00:00", "end": "17:00:00" } ] },
    { "day_of_week": 4, "work_hours": [ { "start": "09:00:00", "end": "13:00:00" } ] },
    { "day_of_week": 5, "is_available": false },
    { "day_of_week": 6, "is_available": false }
  ],
  "breaks": [ { "start": "12:00:00", "end": "13:00:00" } ],
  "appointment_duration_minutes": 60
}"#;

fn run_sample_config() -> Result<()> {
    let config: AvailabilityConfig =
        serde_json::from_str(SAMPLE_CONFIG).context("sample config failed to parse")?;
    config.validate()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
