mod logging;
mod orchestrator;

use std::any::Any;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use gamesmith_core::{Catalog, Dimension, FactoryConfig, Unit};
use gamesmith_generate::{GenerateOptions, Generator};
use gamesmith_publish::{Persister, Promoter, PublishError};
use gamesmith_report::{ReportError, Reporter};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] gamesmith_core::Error),
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "gamesmith", version, about = "Gamesmith template factory CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one production batch: create, persist, promote, report.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to a TOML config file. Defaults to gamesmith.toml in the
    /// output directory; missing file means built-in defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Directory receiving games/, promotion/, reports/, and logs/.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Override the configured units per run.
    #[arg(long)]
    units: Option<u32>,
    /// Seed the sampling RNG for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,
    /// Probability of drawing the 3D dimension (default 0.6).
    #[arg(long, value_name = "WEIGHT")]
    weight_3d: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;

    // Outermost boundary: any unexpected failure maps to a failed,
    // zero-unit run rather than an abort.
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_factory(args)));
    match outcome {
        Ok(Ok(units)) if !units.is_empty() => ExitCode::SUCCESS,
        Ok(Ok(_)) => {
            eprintln!("factory run produced no units");
            ExitCode::FAILURE
        }
        Ok(Err(err)) => {
            eprintln!("factory run failed: {err}");
            ExitCode::FAILURE
        }
        Err(panic) => {
            eprintln!("factory run panicked: {}", panic_message(panic));
            ExitCode::FAILURE
        }
    }
}

fn run_factory(args: RunArgs) -> Result<Vec<Unit>, CliError> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| args.out_dir.join("gamesmith.toml"));
    let config = FactoryConfig::load_or_default(&config_path)?;

    let catalog = Catalog::default();
    catalog.validate()?;

    for dir in ["games", "promotion", "reports", "logs"] {
        std::fs::create_dir_all(args.out_dir.join(dir))?;
    }

    let started_at = Utc::now();
    let log_path = args
        .out_dir
        .join("logs")
        .join(format!("run_{}.ndjson", started_at.format("%Y%m%d")));
    logging::init_logging(&log_path)?;

    let run_id = Uuid::new_v4().to_string();
    let units_target = args.units.unwrap_or(config.production.units_per_run);
    info!(
        event = "run_started",
        run_id = %run_id,
        brand = %config.identity.brand,
        handle = %config.identity.public_handle,
        email = %config.identity.contact_email,
        version = %config.version,
        units_target,
        target_end_date = %config.schedule.target_end_date,
    );

    let mut options = GenerateOptions::default();
    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    if let Some(weight) = args.weight_3d {
        options.three_d_weight = weight;
    }

    let mut generator = Generator::new(catalog, config.clone(), options);
    let persister = Persister::new(config.clone(), &args.out_dir);
    let promoter = Promoter::new(config.clone(), &args.out_dir);

    let units = orchestrator::run_cycles(&mut generator, units_target, |unit| {
        persister.persist(unit)?;
        promoter.promote(unit)?;
        Ok(())
    });

    if units.is_empty() {
        warn!(event = "run_empty", "no units were produced");
        return Ok(units);
    }

    // Reporting is deliberately unguarded: a failure here fails the run.
    let reporter = Reporter::new(config.clone(), &args.out_dir);
    let paths = reporter.write_daily(&units, &run_id, Utc::now())?;

    let units_2d = units
        .iter()
        .filter(|unit| unit.dimension == Dimension::TwoD)
        .count();
    let total_value: i64 = units.iter().map(|unit| unit.price).sum();
    info!(
        event = "run_finished",
        run_id = %run_id,
        units = units.len(),
        units_2d,
        units_3d = units.len() - units_2d,
        total_value,
        contact = %config.identity.contact_email,
        report = %paths.report_path.display(),
        summary = %paths.summary_path.display(),
    );

    Ok(units)
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during factory run".to_string()
    }
}
