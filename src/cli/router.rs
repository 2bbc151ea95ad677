//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::scenario::GeneratorConfig;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Ingest {
            input,
            detailed,
            strict,
        } => run_ingest_command(config, input, detailed, strict),
        Commands::Replay { script, json } => run_replay_command(config, &script, json).await,
        Commands::Generate {
            actions,
            out,
            adds,
            max_time,
            balance,
            seed,
        } => {
            let generator = GeneratorConfig {
                actions,
                adds_per_action: adds,
                max_time,
                balance,
                seed,
            };
            run_generate_command(&generator, &out)
        }
    }
}
