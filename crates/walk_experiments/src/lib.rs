//! Trial driver for random-walk simulations.
//!
//! This crate loads a JSON experiment configuration, runs every configured
//! [`Simulation`](walk_core::Simulation) in parallel, extracts per-simulation
//! summaries and exports them.
//!
//! # Quick Start
//!
//! ```no_run
//! use walk_experiments::{
//!     export_text_report, extract_summaries, run_parallel_simulations, ExperimentConfig,
//! };
//!
//! let config = ExperimentConfig::from_file("walks.json")?;
//! let simulations = run_parallel_simulations(config.build_simulations()?, None)?;
//! let summaries = extract_summaries(&simulations)?;
//! export_text_report(&summaries, "results.txt")?;
//! # Ok::<(), walk_experiments::ExperimentError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: JSON experiment configuration
//! - [`runner`]: Parallel simulation execution using rayon
//! - [`metrics`]: Summary extraction from finished simulations
//! - [`export`]: Result export to JSON/CSV/Parquet/text and average-path CSV

pub mod config;
pub mod error;
pub mod export;
pub mod metrics;
pub mod runner;

pub use config::{ExperimentConfig, SimulationEntry, WalkerSection, WalkerType};
pub use error::{ExperimentError, ExperimentResult};
pub use export::{
    export_avg_paths_csv, export_text_report, export_to_csv, export_to_json, export_to_parquet,
};
pub use metrics::{extract_summaries, extract_summary, SimulationSummary};
pub use runner::{run_parallel_simulations, run_parallel_simulations_with_progress};
