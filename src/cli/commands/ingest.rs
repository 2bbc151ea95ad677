//! Ingest command implementation

use crate::app::AppConfig;
use crate::stats::Accumulator;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{info, warn};

/// Counts of processed input lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Record every non-blank line of `reader` as one event.
///
/// Rejected events are logged and skipped, unless `strict` is set, in which
/// case the first rejection is returned as the error.
pub fn ingest_lines<R: BufRead>(
    accumulator: &Accumulator,
    reader: R,
    strict: bool,
) -> Result<IngestSummary> {
    let mut summary = IngestSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("Failed to read input line {number}"))?;
        if line.trim().is_empty() {
            continue;
        }

        match accumulator.record(&line) {
            Ok(()) => summary.accepted += 1,
            Err(e) if strict => {
                return Err(e).with_context(|| format!("Rejected event on line {number}"));
            }
            Err(e) => {
                warn!(line = number, code = e.code(), "Skipping event: {}", e);
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

/// Ingest events from `input` (or stdin) and print the resulting report
pub fn run_ingest_command(
    config: &AppConfig,
    input: Option<PathBuf>,
    detailed: bool,
    strict: bool,
) -> Result<()> {
    let accumulator = Accumulator::with_config(config.accumulator.clone())?;

    let summary = match &input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            ingest_lines(&accumulator, BufReader::new(file), strict)?
        }
        None => ingest_lines(&accumulator, io::stdin().lock(), strict)?,
    };

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        actions = accumulator.len(),
        "Ingest complete"
    );

    if detailed {
        println!("{}", serde_json::to_string(&accumulator.stats())?);
    } else {
        println!("{}", accumulator.snapshot_json());
    }

    Ok(())
}
