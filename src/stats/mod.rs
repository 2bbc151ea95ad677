//! Per-action timing statistics
//!
//! The [`Accumulator`] receives encoded events of the form
//! `{"action": "jump", "time": 100}`, keeps a running count, sum, minimum and
//! maximum per action, and reports the all-time average of each action on
//! demand.

pub mod accumulator;
pub mod aggregate;
pub mod event;
pub mod report;

pub use accumulator::Accumulator;
pub use aggregate::Aggregate;
pub use event::{parse_event, Event};
pub use report::{ActionAverage, ActionStats};
