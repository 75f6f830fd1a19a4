//! Resource Optimization CLI
//!
//! A command-line tool for inspecting container right-sizing
//! recommendations: current vs recommended configuration, per-resource
//! changes, and report listings.

mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use breakdown_lib::{BreakdownSettings, Interval, OptimizationType};
use clap::{Args, Parser, Subcommand};
use commands::{breakdown, list, variations};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resource Optimization CLI
#[derive(Parser)]
#[command(name = "ros")]
#[command(author, version, about = "CLI for Resource Optimization breakdowns", long_about = None)]
pub struct Cli {
    /// Path to the CLI config file (defaults to ~/.config/ros/config.json)
    #[arg(long, env = "ROS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show current and recommended configuration side by side
    Breakdown(SelectionArgs),

    /// Show the change for each resource limit and request
    Variations(SelectionArgs),

    /// List the recommendations in a report
    List {
        /// Recommendations report (JSON)
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct SelectionArgs {
    /// Recommendations report or single recommendation (JSON)
    pub file: PathBuf,

    /// Recommendation ID (defaults to the first in the report)
    #[arg(long)]
    pub id: Option<String>,

    /// Recommendation term (short-term, medium-term, long-term)
    #[arg(long, short)]
    pub interval: Option<Interval>,

    /// Optimization engine (cost, performance)
    #[arg(long, short)]
    pub engine: Option<OptimizationType>,
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config = config::Config::load(cli.config.as_deref())?;
    let settings = BreakdownSettings::load()?;
    let format = config.format(cli.format)?;
    debug!(?settings, ?format, "CLI configured");

    match cli.command {
        Commands::Breakdown(args) => {
            breakdown::show_breakdown(
                &args.file,
                args.id.as_deref(),
                config.interval(args.interval),
                config.engine(args.engine),
                settings,
                format,
            )?;
        }
        Commands::Variations(args) => {
            variations::show_variations(
                &args.file,
                args.id.as_deref(),
                config.interval(args.interval),
                config.engine(args.engine),
                settings,
                format,
            )?;
        }
        Commands::List { file } => {
            list::list_recommendations(&file, settings, format)?;
        }
    }

    Ok(())
}
