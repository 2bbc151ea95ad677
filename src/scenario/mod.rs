//! Scenario scripts: generate, parse and replay command sequences that
//! exercise an [`crate::stats::Accumulator`] under concurrent reads and writes.

pub mod command;
pub mod generate;
pub mod runner;

pub use command::{parse_script, write_script, ScenarioCommand};
pub use generate::{generate_scenario, Balance, GeneratorConfig};
pub use runner::{run_scenario, Mismatch, ScenarioReport};
