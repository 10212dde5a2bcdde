//! # gs-cli
//!
//! Command-line interface for Goalsmith.
//!
//! - `goalsmith generate <DOC> --skills <DIR>`: run the full pipeline and
//!   optionally package the bundle
//! - `goalsmith analyze <DOC>`: print the GoalDefinition
//! - `goalsmith plan <DOC>`: print the ExecutionPlan
//! - `goalsmith skills --skills <DIR>`: list a skill catalog
//!
//! Configuration comes from `--config <FILE>`, or `goalsmith.toml` in the
//! current directory when present. Logs go to stderr at `info` for the CLI
//! and `warn` for the libraries; a `RUST_LOG` directive such as
//! `gs_skills=debug` replaces those defaults.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gs_pipeline::{PipelineConfig, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

/// Goalsmith: turn a goal description into an executable agent bundle.
#[derive(Parser)]
#[command(name = "goalsmith", version, about)]
struct Cli {
    /// Config file (defaults to ./goalsmith.toml when it exists).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze, plan, select skills and assemble a bundle.
    Generate {
        /// Goal document to read.
        document: PathBuf,
        /// Skill library directory.
        #[arg(long)]
        skills: PathBuf,
        /// Write bundle.json and manifest.json into this directory.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Fail instead of falling back when some phase is not covered.
        #[arg(long)]
        strict: bool,
        /// Print the bundle as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the GoalDefinition extracted from a document.
    Analyze {
        /// Goal document to read.
        document: PathBuf,
    },
    /// Print the execution plan for a document.
    Plan {
        /// Goal document to read.
        document: PathBuf,
        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the skills in a skill library.
    Skills {
        /// Skill library directory.
        #[arg(long)]
        skills: PathBuf,
    },
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str =
    "goalsmith=info,gs_pipeline=warn,gs_skills=warn,gs_assembler=warn";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with JSON on stdout. RUST_LOG
    // replaces the default filter entirely.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Generate {
            document,
            skills,
            output,
            strict,
            json,
        } => commands::generate::execute(
            config,
            document,
            skills,
            output.as_deref(),
            *strict,
            *json,
        ),
        Commands::Analyze { document } => commands::analyze::execute(&config, document),
        Commands::Plan { document, json } => commands::plan::execute(&config, document, *json),
        Commands::Skills { skills } => commands::skills::execute(skills),
    }
}

/// An explicit `--config` must exist; the default file is optional.
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => PipelineConfig::load_or_default(CONFIG_FILE_NAME)
            .with_context(|| format!("loading {}", CONFIG_FILE_NAME)),
    }
}
