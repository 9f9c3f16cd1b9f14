// ABOUTME: Challenge CLI - prints group, personal, record, and forecast reports
// ABOUTME: Loads the JSON snapshot and renders analytics as JSON or plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Group overview of everyone
//! challenge-cli group
//!
//! # Personal page restricted to a date range, as JSON
//! challenge-cli --from 2025-01-01 --to 2025-03-31 --format json person Alice
//!
//! # Records over realised rows only
//! challenge-cli --type realisation records
//!
//! # On-track 5 km time for a person at a date
//! challenge-cli forecast Alice run_5km_sec 2025-02-15
//! ```

mod display;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pierre_challenge::config::ChallengeConfig;
use pierre_challenge::dashboard::{Dashboard, DashboardFilters};
use pierre_challenge::errors::AppError;
use pierre_challenge::logging::LoggingConfig;
use pierre_challenge::models::RecordType;
use pierre_challenge::snapshot::Snapshot;
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "challenge-cli",
    about = "Pierre Challenge progress analytics",
    long_about = "Computes group and personal progress reports from a challenge measurement snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Measurement rows JSON file (overrides `CHALLENGE_DATA_PATH`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// People metadata JSON file (overrides `CHALLENGE_META_PATH`)
    #[arg(long, global = true)]
    meta: Option<PathBuf>,

    /// Inclusive lower date bound (YYYY-MM-DD)
    #[arg(long, global = true)]
    from: Option<String>,

    /// Inclusive upper date bound (YYYY-MM-DD)
    #[arg(long, global = true)]
    to: Option<String>,

    /// Record types to include (repeatable, defaults to both)
    #[arg(long = "type", value_enum, global = true)]
    record_types: Vec<RecordTypeArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Group KPIs, evolution summaries, and highlights
    Group {
        /// Narrow records and highlights to these people
        #[arg(long = "person")]
        people: Vec<String>,
    },

    /// Personal page of one person
    Person {
        /// Person name as it appears in the snapshot
        name: String,
    },

    /// Global records and best/worst transitions per metric
    Records,

    /// On-track value of a metric at a date
    Forecast {
        /// Person name
        name: String,
        /// Metric key (e.g. `pompes`, `run_5km_sec`)
        metric: String,
        /// Date to interpolate (YYYY-MM-DD)
        date: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RecordTypeArg {
    Realisation,
    Previsionnel,
}

impl From<RecordTypeArg> for RecordType {
    fn from(arg: RecordTypeArg) -> Self {
        match arg {
            RecordTypeArg::Realisation => Self::Realisation,
            RecordTypeArg::Previsionnel => Self::Previsionnel,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = ChallengeConfig::global()
        .clone()
        .with_paths(cli.data, cli.meta);
    info!(data = %config.data_path.display(), "Loading challenge snapshot");
    let snapshot = Snapshot::load(&config.data_path, &config.meta_path).await?;

    let mut filters = DashboardFilters {
        from: cli.from,
        to: cli.to,
        ..DashboardFilters::default()
    };
    if !cli.record_types.is_empty() {
        filters.record_types = cli.record_types.into_iter().map(RecordType::from).collect();
    }

    let dashboard = Dashboard::new(config.analytics);
    let as_json = cli.format == OutputFormat::Json;

    match cli.command {
        Command::Group { people } => {
            filters.people = people;
            let report = dashboard.group_report(&snapshot.rows, &filters);
            if as_json {
                print_json(&report)?;
            } else {
                display::display_group(&report);
            }
        }
        Command::Person { name } => {
            let report = dashboard.personal_report(&snapshot, &filters, &name)?;
            if as_json {
                print_json(&report)?;
            } else {
                display::display_personal(&report);
            }
        }
        Command::Records => {
            let report = dashboard.group_report(&snapshot.rows, &filters);
            if as_json {
                print_json(&json!({
                    "records": report.records,
                    "best_and_worst": report.best_and_worst,
                }))?;
            } else {
                display::display_records(&report.records, &report.best_and_worst);
            }
        }
        Command::Forecast { name, metric, date } => {
            let report = dashboard.forecast(&snapshot.rows, &name, &metric, &date)?;
            if as_json {
                print_json(&report)?;
            } else {
                display::display_forecast(&report);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
