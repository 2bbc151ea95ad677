//! CLI command implementations

pub mod generate;
pub mod ingest;
pub mod replay;

pub use generate::run_generate_command;
pub use ingest::{ingest_lines, run_ingest_command, IngestSummary};
pub use replay::run_replay_command;
