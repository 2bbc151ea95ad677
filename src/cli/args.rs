//! CLI argument structures
//!
//! This module defines all command-line interface structures used by actiontime.

use crate::scenario::Balance;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Accumulate timed action events and report per-action averages
#[derive(Parser)]
#[command(name = "actiontime")]
#[command(about = "actiontime - Accumulate and report per-action timing statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum action name length in characters (overrides the config file)
    #[arg(long, global = true, value_name = "CHARS")]
    pub max_action_len: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record newline-delimited JSON events and print the resulting statistics
    Ingest {
        /// File to read events from (defaults to stdin)
        input: Option<PathBuf>,

        /// Report count, min, max and average instead of the average alone
        #[arg(long)]
        detailed: bool,

        /// Stop at the first rejected event
        #[arg(long)]
        strict: bool,
    },

    /// Replay a scenario script and verify its expected averages
    Replay {
        /// Scenario script (CSV)
        script: PathBuf,

        /// Print the replay report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random scenario script
    Generate {
        /// Actions to interleave
        #[arg(required = true)]
        actions: Vec<String>,

        /// Path of the script to write
        #[arg(short, long, value_name = "CSV")]
        out: PathBuf,

        /// Number of adds per action
        #[arg(long = "add", default_value_t = 1)]
        adds: usize,

        /// Maximum time an action can take
        #[arg(long, default_value_t = 1e6)]
        max_time: f64,

        /// Balance between read and write commands
        #[arg(long, value_enum, default_value_t = Balance::Balanced)]
        balance: Balance,

        /// Seed for reproducible scripts
        #[arg(long)]
        seed: Option<u64>,
    },
}
