//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{validate_schedule_config, ScheduleConfig};
use crate::domain::error::TradeclockError;
use crate::domain::interval;
use crate::domain::ops::{add_interval, is_after, to_utc};
use crate::domain::schedule::Schedule;
use crate::ports::window_port::WindowPort;

#[derive(Parser, Debug)]
#[command(name = "tradeclock", about = "Timestamp normalization and trading interval arithmetic")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a timestamp to canonical UTC
    Utc { timestamp: String },
    /// Print whether the first timestamp is strictly after the second
    Compare { first: String, second: String },
    /// Advance an offset-bearing timestamp by an interval token
    Add { timestamp: String, interval: String },
    /// List supported interval tokens
    Intervals,
    /// Emit (begin, end, interval) windows from start to end as CSV
    Schedule {
        #[arg(short, long, conflicts_with_all = ["start", "end", "interval"])]
        config: Option<PathBuf>,
        #[arg(long, requires_all = ["end", "interval"])]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        interval: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn execute(cli: Cli) -> Result<(), TradeclockError> {
    match cli.command {
        Command::Utc { timestamp } => to_utc(&timestamp).map(print_line).map_err(Into::into),
        Command::Compare { first, second } => is_after(&first, &second)
            .map(|after| print_line(after.to_string()))
            .map_err(Into::into),
        Command::Add {
            timestamp,
            interval,
        } => add_interval(&timestamp, &interval)
            .map(print_line)
            .map_err(Into::into),
        Command::Intervals => {
            for (token, spec) in interval::tokens() {
                println!("{token:>4}  {spec}");
            }
            Ok(())
        }
        Command::Schedule {
            config,
            start,
            end,
            interval,
            output,
        } => resolve_schedule_config(config.as_ref(), start, end, interval, output)
            .and_then(|config| run_schedule(&config)),
    }
}

fn print_line(line: String) {
    println!("{line}");
}

/// Builds the schedule settings from a config file or from flags.
/// An explicit `--output` overrides the file's `output` key.
pub fn resolve_schedule_config(
    config_path: Option<&PathBuf>,
    start: Option<String>,
    end: Option<String>,
    interval: Option<String>,
    output: Option<PathBuf>,
) -> Result<ScheduleConfig, TradeclockError> {
    let mut config = match config_path {
        Some(path) => {
            log::info!("loading schedule config from {}", path.display());
            let adapter = FileConfigAdapter::from_file(path)?;
            validate_schedule_config(&adapter)?
        }
        None => {
            let missing = |key: &str| TradeclockError::ConfigMissing {
                section: "schedule".to_string(),
                key: key.to_string(),
            };
            let config = ScheduleConfig {
                start: start.ok_or_else(|| missing("start"))?,
                end: end.ok_or_else(|| missing("end"))?,
                interval: interval.ok_or_else(|| missing("interval"))?,
                output: None,
            };
            Schedule::new(&config.start, &config.end, &config.interval)?;
            config
        }
    };
    if output.is_some() {
        config.output = output;
    }
    Ok(config)
}

pub fn run_schedule(config: &ScheduleConfig) -> Result<(), TradeclockError> {
    match &config.output {
        Some(path) => {
            let mut adapter = CsvAdapter::create(path)?;
            let count = write_schedule(config, &mut adapter)?;
            log::info!("wrote {count} windows to {}", path.display());
        }
        None => {
            let mut adapter = CsvAdapter::new(io::stdout().lock())?;
            write_schedule(config, &mut adapter)?;
        }
    }
    Ok(())
}

/// Feeds every window of the schedule to `port`, returning the window count.
pub fn write_schedule(
    config: &ScheduleConfig,
    port: &mut dyn WindowPort,
) -> Result<usize, TradeclockError> {
    let schedule = Schedule::new(&config.start, &config.end, &config.interval)?;
    log::info!(
        "scheduling {} windows from {} to {}",
        schedule.interval(),
        schedule.start().unwrap_or_default(),
        schedule.end()
    );
    let mut count = 0;
    for window in schedule {
        port.write_window(&window?)?;
        count += 1;
    }
    port.flush()?;
    Ok(count)
}
