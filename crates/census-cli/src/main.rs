mod registry;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use census_core::{CompositionPolicy, GenerationRequest};
use census_generate::{
    BatchEngine, CancellationToken, DirectorySink, GenerateOptions, GenerationError, OutputFormat,
};
use registry::{RunContext, init_run_logging, start_run, write_report};
use settings::{DEFAULT_SETTINGS_FILE, Settings, SettingsError, load_settings, save_settings};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("core error: {0}")]
    Core(#[from] census_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("generation task failed: {0}")]
    Task(String),
}

#[derive(Parser, Debug)]
#[command(name = "census", version, about = "Synthetic census file generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate census files.
    Generate(GenerateArgs),
    /// Write a settings file with the default values.
    Init(InitArgs),
    /// List the available household compositions.
    Policies,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Settings file (defaults to ./census.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of files, 1-5. Out-of-range values are clamped.
    #[arg(long, allow_hyphen_values = true)]
    files: Option<String>,
    /// Households per file, 1-10. Out-of-range values are clamped.
    #[arg(long, allow_hyphen_values = true)]
    households: Option<String>,
    /// Household composition, e.g. `employee-spouse`.
    #[arg(long)]
    policy: Option<String>,
    /// Output format: xlsx or csv.
    #[arg(long)]
    format: Option<String>,
    /// Directory receiving the generated files.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Directory for run metadata and logs.
    #[arg(long)]
    run_dir: Option<PathBuf>,
    /// Seed for reproducible batches.
    #[arg(long)]
    seed: Option<u64>,
    /// Organisation named in the title row.
    #[arg(long)]
    presented_to: Option<String>,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Where to write the settings file.
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Init(args) => run_init(args),
        Command::Policies => {
            for policy in CompositionPolicy::ALL {
                println!("{:<24}{}", policy.id(), policy.label());
            }
            Ok(())
        }
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_settings(args.config.as_deref())?;

    let policy = match args.policy.as_deref() {
        Some(value) => value.parse::<CompositionPolicy>()?,
        None => settings.policy,
    };
    let format = match args.format.as_deref() {
        Some(value) => value.parse::<OutputFormat>()?,
        None => settings.format,
    };
    let files = args.files.unwrap_or_else(|| settings.files.to_input());
    let households = args
        .households
        .unwrap_or_else(|| settings.households.to_input());
    let request = GenerationRequest::from_inputs(&files, &households, policy);

    let options = GenerateOptions {
        presented_to: args.presented_to.unwrap_or(settings.presented_to),
        format,
        max_attempts: settings.max_attempts,
        seed: args.seed,
    };
    if options.max_attempts == 0 {
        return Err(CliError::InvalidConfig(
            "max_attempts must be at least 1".to_string(),
        ));
    }

    let out_dir = args.out.unwrap_or(settings.out_dir);
    let run_ctx = RunContext {
        run_id: Uuid::new_v4().to_string(),
        started_at: chrono::Utc::now(),
        run_dir: args.run_dir.unwrap_or(settings.run_dir),
        out_dir: out_dir.clone(),
        request,
        options: options.clone(),
    };

    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    tracing::info!(
        event = "run_started",
        run_id = %run_ctx.run_id,
        files = request.num_files(),
        households = request.num_households(),
        policy = %request.policy()
    );

    let timer = Instant::now();
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!(event = "cancel_requested");
            signal_token.cancel();
        }
    });

    let now = chrono::Local::now().naive_local();
    let engine = BatchEngine::new(options);
    let outcome = tokio::task::spawn_blocking(move || {
        let mut sink = DirectorySink::new(out_dir);
        engine.run(&request, now, &mut sink, &cancel)
    })
    .await
    .map_err(|err| CliError::Task(err.to_string()))?;

    let report = match outcome {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(event = "run_finished", status = "failed", error = %err);
            return Err(err.into());
        }
    };

    write_report(&run_paths, &report)?;
    tracing::info!(event = "report_written", path = %run_paths.report_path.display());

    for file in &report.files {
        println!("{}", file.location);
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        run_dir = %run_paths.root.display(),
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

fn run_init(args: InitArgs) -> Result<(), CliError> {
    if args.config.exists() && !args.force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists (use --force to overwrite)",
            args.config.display()
        )));
    }

    save_settings(&args.config, &Settings::default())?;
    println!("{}", args.config.display());
    Ok(())
}
