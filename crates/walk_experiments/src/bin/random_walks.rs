use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use walk_experiments::{
    export_avg_paths_csv, export_text_report, export_to_csv, export_to_json, export_to_parquet,
    extract_summaries, run_parallel_simulations_with_progress, ExperimentConfig, ExperimentError,
    ExperimentResult,
};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "random_walks",
    about = "Simulate random walks and save statistics about them",
    long_about = "Simulate random walks described by a JSON configuration and save\n\
                  per-simulation statistics to a text report, with optional\n\
                  JSON/CSV/Parquet summaries and an average-path CSV.",
    after_help = "Statistics per simulation: average distance from the origin and from the\n\
                  configured axis after the final step, average step at which the walker\n\
                  left the configured radius, and average number of y-axis crossings."
)]
struct Cli {
    /// The file with the walks configuration. Must be a .json file.
    config_file: PathBuf,
    /// The file where the statistics report will be saved. Must be a .txt file.
    output_file: PathBuf,
    /// Also write the summaries as a JSON array
    #[arg(long)]
    json: Option<PathBuf>,
    /// Also write the summaries as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Also write the summaries as Parquet
    #[arg(long)]
    parquet: Option<PathBuf>,
    /// Write the average path of every 2D/3D simulation as CSV
    #[arg(long)]
    paths_csv: Option<PathBuf>,
    /// Worker threads (defaults to one per core)
    #[arg(long, env = "RANDOM_WALKS_THREADS")]
    threads: Option<usize>,
    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

// ── Helpers ────────────────────────────────────────────────────────

fn require_extension(path: &Path, extension: &str, what: &str) -> ExperimentResult<()> {
    if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
        Ok(())
    } else {
        Err(ExperimentError::config(format!(
            "the {what} must be a .{extension} file, got {}",
            path.display()
        )))
    }
}

fn run(cli: Cli) -> ExperimentResult<()> {
    require_extension(&cli.config_file, "json", "configuration file")?;
    require_extension(&cli.output_file, "txt", "output file")?;

    let config = ExperimentConfig::from_file(&cli.config_file)?;
    let simulations = config.build_simulations()?;
    let simulations =
        run_parallel_simulations_with_progress(simulations, cli.threads, !cli.no_progress)?;
    let summaries = extract_summaries(&simulations)?;

    export_text_report(&summaries, &cli.output_file)?;
    if let Some(path) = &cli.json {
        export_to_json(&summaries, path)?;
    }
    if let Some(path) = &cli.csv {
        export_to_csv(&summaries, path)?;
    }
    if let Some(path) = &cli.parquet {
        export_to_parquet(&summaries, path)?;
    }
    if let Some(path) = &cli.paths_csv {
        export_avg_paths_csv(&simulations, path)?;
    }

    info!(simulations = summaries.len(), "done");
    Ok(())
}

// ── Main ───────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        exit(1);
    }
}
