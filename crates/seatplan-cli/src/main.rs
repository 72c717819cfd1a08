use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use seatplan::{ConfigError, PlanMode, PlanResult, SeatPlanConfig, SeatingManager, CONFIG_FILE};
use tracing::debug;

mod chart;
mod error;
mod report;
mod store;

use chart::ChartFile;
use error::CliError;
use store::JsonFileStore;

#[derive(Parser)]
#[command(name = "seatplan", about = "Wedding seating optimizer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a seating, and optionally store it
    Plan(PlanArgs),

    /// Check the stored seating for conflicts
    Validate(ValidateArgs),
}

#[derive(Args)]
struct CommonArgs {
    /// Chart file with guests and tables
    #[arg(short, long)]
    input: PathBuf,

    /// Assignment store file
    #[arg(long, env = "SEATPLAN_STORE", default_value = "assignments.json")]
    store: PathBuf,

    /// Scoring and planner configuration (TOML or YAML)
    #[arg(long, env = "SEATPLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PlanArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Preview only, or replace the stored seating
    #[arg(long, value_enum, default_value_t = ModeArg::Optimize)]
    mode: ModeArg,
}

#[derive(Args)]
struct ValidateArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Optimize,
    Apply,
}

impl From<ModeArg> for PlanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Optimize => PlanMode::Optimize,
            ModeArg::Apply => PlanMode::Apply,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Plan(args) => run_plan(args),
        Commands::Validate(args) => run_validate(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bright_red().bold());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let common = args.common;
    let (chart, config) = prepare(&common)?;
    let store = JsonFileStore::open(&common.store)?;

    let request = chart.request(args.mode.into());
    let mut manager = SeatingManager::new(&chart, store, &config);
    let result = manager.handle(&request)?;

    emit(&result, &chart, common.json)
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let common = args.common;
    let (chart, config) = prepare(&common)?;
    let store = JsonFileStore::open(&common.store)?;

    let request = chart.request(PlanMode::Optimize);
    let manager = SeatingManager::new(&chart, store, &config);
    let result = manager.validate_existing(&request)?;

    emit(&result, &chart, common.json)
}

fn prepare(common: &CommonArgs) -> Result<(ChartFile, SeatPlanConfig), CliError> {
    // JSON output owns stdout.
    if !common.json {
        seatplan::console::init();
    }
    let config = load_config(common.config.as_deref())?;
    let chart = ChartFile::read(&common.input)?;
    Ok((chart, config))
}

/// Loads an explicit config file, or `seatplan.toml` if present.
///
/// Only a missing `seatplan.toml` falls back to defaults; a file that fails
/// to parse or validate is an error either way.
fn load_config(path: Option<&Path>) -> Result<SeatPlanConfig, CliError> {
    let Some(path) = path else {
        return match SeatPlanConfig::load(CONFIG_FILE) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Ok(SeatPlanConfig::default())
            }
            Err(e) => Err(e.into()),
        };
    };
    debug!(event = "config_loaded", path = %path.display());
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => SeatPlanConfig::from_yaml_file(path)?,
        _ => SeatPlanConfig::from_toml_file(path)?,
    };
    Ok(config)
}

fn emit(result: &PlanResult, chart: &ChartFile, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", report::render(result, chart));
    }
    Ok(())
}
