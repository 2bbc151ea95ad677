//! Scenario replay against a shared accumulator

use super::command::ScenarioCommand;
use crate::error::ScenarioError;
use crate::stats::Accumulator;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, trace, warn};

/// Relative tolerance used when checking reported averages
pub const AVERAGE_TOLERANCE: f64 = 1e-9;

/// Outcome of a scenario replay
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Events recorded successfully
    pub adds: usize,
    /// Snapshots taken by `getasync` commands
    pub snapshots: usize,
    /// `get` checks performed
    pub checks: usize,
    /// `get` checks that did not match
    pub mismatches: Vec<Mismatch>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// A `get` check whose reported average differed from the expected one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub row: usize,
    pub action: String,
    pub expected: f64,
    /// `None` when the action was missing from the snapshot
    pub actual: Option<f64>,
}

enum Completed {
    Added,
    Snapshot,
}

type Tasks = JoinSet<Result<Completed, ScenarioError>>;

/// Replay `commands` in order against `accumulator`.
///
/// Asynchronous commands run on blocking worker tasks; `sync` waits for all of
/// them. Outstanding tasks are awaited before the report is returned. A
/// rejected event aborts the replay.
pub async fn run_scenario(
    accumulator: Arc<Accumulator>,
    commands: Vec<ScenarioCommand>,
) -> Result<ScenarioReport, ScenarioError> {
    let mut report = ScenarioReport::default();
    let mut tasks: Tasks = JoinSet::new();

    for (index, command) in commands.into_iter().enumerate() {
        let row = index + 1;
        trace!(row, command = command.name(), "replaying command");

        match command {
            ScenarioCommand::Add { action, time } => {
                record(&accumulator, row, &action, time)?;
                report.adds += 1;
            }
            ScenarioCommand::AddAsync { action, time } => {
                let accumulator = Arc::clone(&accumulator);
                tasks.spawn_blocking(move || {
                    record(&accumulator, row, &action, time).map(|_| Completed::Added)
                });
            }
            ScenarioCommand::GetAsync { .. } => {
                let accumulator = Arc::clone(&accumulator);
                tasks.spawn_blocking(move || {
                    let snapshot = accumulator.snapshot_json();
                    trace!(row, bytes = snapshot.len(), "took snapshot");
                    Ok(Completed::Snapshot)
                });
            }
            ScenarioCommand::Sync => {
                debug!(row, pending = tasks.len(), "waiting for outstanding tasks");
                drain(&mut tasks, &mut report).await?;
            }
            ScenarioCommand::Get { action, expected } => {
                report.checks += 1;
                let actual = accumulator
                    .snapshot()
                    .into_iter()
                    .find(|entry| entry.action == action)
                    .map(|entry| entry.time);

                if !actual.is_some_and(|actual| approx_eq(actual, expected)) {
                    warn!(row, %action, expected, ?actual, "average mismatch");
                    report.mismatches.push(Mismatch {
                        row,
                        action,
                        expected,
                        actual,
                    });
                }
            }
        }
    }

    drain(&mut tasks, &mut report).await?;
    Ok(report)
}

fn record(
    accumulator: &Accumulator,
    row: usize,
    action: &str,
    time: f64,
) -> Result<(), ScenarioError> {
    let payload = json!({ "action": action, "time": time }).to_string();
    accumulator
        .record(payload)
        .map_err(|source| ScenarioError::Rejected { row, source })
}

async fn drain(tasks: &mut Tasks, report: &mut ScenarioReport) -> Result<(), ScenarioError> {
    while let Some(joined) = tasks.join_next().await {
        match joined?? {
            Completed::Added => report.adds += 1,
            Completed::Snapshot => report.snapshots += 1,
        }
    }
    Ok(())
}

fn approx_eq(actual: f64, expected: f64) -> bool {
    let scale = actual.abs().max(expected.abs()).max(1.0);
    (actual - expected).abs() <= AVERAGE_TOLERANCE * scale
}
