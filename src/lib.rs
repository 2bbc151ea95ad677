//! # actiontime
//!
//! An in-process accumulator of timed action events. Callers feed it encoded
//! events such as `{"action": "jump", "time": 100}` from any number of threads
//! and ask for a snapshot of the all-time average time per action:
//!
//! ```
//! use actiontime::Accumulator;
//!
//! let stats = Accumulator::new();
//! stats.record(r#"{"action":"jump", "time":100}"#).unwrap();
//! stats.record(r#"{"action":"run", "time":75}"#).unwrap();
//! stats.record(r#"{"action":"jump", "time":200}"#).unwrap();
//!
//! assert_eq!(
//!     stats.snapshot_json(),
//!     r#"[{"action":"jump","time":150.0},{"action":"run","time":75.0}]"#
//! );
//! ```
//!
//! ## Modules
//!
//! - `stats` - Event validation, per-action aggregates and the accumulator
//! - `config` - Accumulator configuration
//! - `error` - Error types and error codes
//! - `scenario` - Generation and replay of concurrent command scripts
//! - `app` - Application configuration, logging and fatal error handling
//! - `cli` - Command-line interface
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod scenario;
pub mod stats;

pub use config::{AccumulatorConfig, MAX_ACTION_LEN};
pub use error::{ConfigError, FormatError, InvalidInputError, RecordError, ScenarioError};
pub use stats::{Accumulator, ActionAverage, ActionStats, Event};
