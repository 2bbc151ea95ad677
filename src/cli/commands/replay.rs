//! Replay command implementation

use crate::app::AppConfig;
use crate::scenario::{parse_script, run_scenario, ScenarioReport};
use crate::stats::Accumulator;
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Replay a scenario script and fail if any check mismatched
pub async fn run_replay_command(config: &AppConfig, script: &Path, json: bool) -> Result<()> {
    let file = File::open(script)
        .with_context(|| format!("Failed to open scenario script {}", script.display()))?;
    let commands = parse_script(file)?;
    debug!(commands = commands.len(), "Parsed scenario script");

    let accumulator = Arc::new(Accumulator::with_config(config.accumulator.clone())?);
    let report = run_scenario(Arc::clone(&accumulator), commands).await?;

    info!(
        adds = report.adds,
        snapshots = report.snapshots,
        checks = report.checks,
        "Replay complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    if report.passed() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} check(s) failed",
            report.mismatches.len(),
            report.checks
        ))
    }
}

fn print_summary(report: &ScenarioReport) {
    println!(
        "Recorded {} event(s), took {} snapshot(s), ran {} check(s)",
        report.adds, report.snapshots, report.checks
    );
    for mismatch in &report.mismatches {
        match mismatch.actual {
            Some(actual) => println!(
                "  row {}: '{}' expected {} but got {}",
                mismatch.row, mismatch.action, mismatch.expected, actual
            ),
            None => println!(
                "  row {}: '{}' expected {} but it was never recorded",
                mismatch.row, mismatch.action, mismatch.expected
            ),
        }
    }
}
