mod render;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cc_project::{CaseFile, ProjectError, load_path, save_path, tune_cases};
use cc_tuning::{ControllerKind, ProcessModel, TuningError, compute};
use render::{OutputFormat, render_named, render_result};

#[derive(Parser)]
#[command(name = "cc-cli")]
#[command(about = "Cohen-Coon tuning calculator for FOPTD process models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tune one controller for one process model
    Tune {
        #[command(flatten)]
        model: ModelArgs,
        /// Controller type: P, PI or PID
        #[arg(short, long, default_value = "P", value_parser = parse_kind)]
        controller: ControllerKind,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Reject negative gain or times instead of warning
        #[arg(long)]
        strict: bool,
    },
    /// Tune P, PI and PID for one process model
    All {
        #[command(flatten)]
        model: ModelArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Tune every case in a YAML/JSON case file
    Batch {
        /// Path to the case file
        cases_path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Validate a case file without tuning
    Validate {
        /// Path to the case file
        cases_path: PathBuf,
    },
    /// Write a template case file
    Init {
        /// Output path (.yaml, .yml or .json)
        cases_path: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct ModelArgs {
    /// Process gain K
    #[arg(short = 'k', long, default_value_t = 1.0, allow_hyphen_values = true)]
    gain: f64,
    /// Time constant τ
    #[arg(short = 't', long, default_value_t = 1.0, allow_hyphen_values = true)]
    tau: f64,
    /// Time delay θ
    #[arg(short = 'd', long, default_value_t = 0.1, allow_hyphen_values = true)]
    theta: f64,
}

impl ModelArgs {
    fn model(&self) -> ProcessModel {
        ProcessModel::new(self.gain, self.tau, self.theta)
    }
}

fn parse_kind(s: &str) -> Result<ControllerKind, String> {
    s.parse().map_err(|e: TuningError| e.to_string())
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Tuning(#[from] TuningError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{failed} of {total} cases failed")]
    CasesFailed { failed: usize, total: usize },

    #[error("Refusing to overwrite existing file: {0}")]
    Exists(PathBuf),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Line printed to stderr when a command fails.
fn error_message(err: &CliError) -> String {
    format!("Error: {err}")
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Tune {
            model,
            controller,
            format,
            strict,
        } => cmd_tune(&model, controller, format, strict),
        Commands::All { model, format } => cmd_all(&model, format),
        Commands::Batch { cases_path, format } => cmd_batch(&cases_path, format),
        Commands::Validate { cases_path } => cmd_validate(&cases_path),
        Commands::Init { cases_path } => cmd_init(&cases_path),
    }
}

fn check_model(model: &ProcessModel, strict: bool) -> CliResult<()> {
    if let Err(err) = model.check_physical() {
        if strict {
            return Err(err.into());
        }
        tracing::warn!(error = %err, "tuning a non-physical process model");
    }
    Ok(())
}

fn cmd_tune(
    args: &ModelArgs,
    controller: ControllerKind,
    format: OutputFormat,
    strict: bool,
) -> CliResult<()> {
    let model = args.model();
    check_model(&model, strict)?;
    let result = compute(controller, &model)?;
    print!("{}", render_result(&result, format)?);
    Ok(())
}

fn cmd_all(args: &ModelArgs, format: OutputFormat) -> CliResult<()> {
    let model = args.model();
    check_model(&model, false)?;
    let results = ControllerKind::ALL
        .iter()
        .map(|kind| Ok((kind.to_string(), compute(*kind, &model)?)))
        .collect::<CliResult<Vec<_>>>()?;
    print!("{}", render_named(&results, format)?);
    Ok(())
}

fn cmd_batch(cases_path: &Path, format: OutputFormat) -> CliResult<()> {
    let file = load_path(cases_path)?;
    tracing::info!(name = %file.name, cases = file.cases.len(), "tuning case file");

    let outcomes = tune_cases(&file);
    let total = outcomes.len();
    let mut tuned = Vec::with_capacity(total);
    let mut failed = 0usize;
    for outcome in outcomes {
        match outcome.result {
            Ok(result) => tuned.push((outcome.name, result)),
            Err(err) => {
                eprintln!("✗ {}: {}", outcome.name, err);
                failed += 1;
            }
        }
    }

    print!("{}", render_named(&tuned, format)?);

    if failed > 0 {
        return Err(CliError::CasesFailed { failed, total });
    }
    Ok(())
}

fn cmd_validate(cases_path: &Path) -> CliResult<()> {
    println!("Validating case file: {}", cases_path.display());
    let file = load_path(cases_path)?;
    println!("✓ Case file is valid ({} cases)", file.cases.len());
    Ok(())
}

fn cmd_init(cases_path: &Path) -> CliResult<()> {
    if cases_path.exists() {
        return Err(CliError::Exists(cases_path.to_path_buf()));
    }
    let name = cases_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cases");
    save_path(cases_path, &CaseFile::template(name))?;
    println!("✓ Wrote template case file: {}", cases_path.display());
    Ok(())
}
