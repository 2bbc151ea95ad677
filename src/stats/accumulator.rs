//! Thread-safe accumulator of per-action statistics

use super::aggregate::Aggregate;
use super::event::{parse_event, Event};
use super::report::{ActionAverage, ActionStats};
use crate::config::AccumulatorConfig;
use crate::error::{ConfigError, InvalidInputError, RecordError};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Accumulates timed action events and reports per-action averages.
///
/// All state lives behind a single lock over the whole mapping, so every
/// [`record`](Self::record) and [`snapshot`](Self::snapshot) is atomic with
/// respect to every other call. Share between threads with `Arc`.
///
/// Snapshots are ordered by action name, compared byte-wise.
#[derive(Debug, Default)]
pub struct Accumulator {
    config: AccumulatorConfig,
    state: RwLock<BTreeMap<String, Aggregate>>,
}

impl Accumulator {
    /// Create an empty accumulator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty accumulator with a validated configuration
    pub fn with_config(config: AccumulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: RwLock::new(BTreeMap::new()),
        })
    }

    /// Create an empty accumulator accepting action names up to `max_action_len` characters
    pub fn with_max_action_len(max_action_len: usize) -> Result<Self, ConfigError> {
        Self::with_config(AccumulatorConfig::default().with_max_action_len(max_action_len))
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    /// Decode, validate and fold one encoded event.
    ///
    /// On error the state is left untouched. Validation happens before the
    /// lock is taken, so a malformed payload never blocks other callers. A
    /// time that would overflow the action's running total is rejected as
    /// invalid input.
    pub fn record(&self, payload: impl AsRef<[u8]>) -> Result<(), RecordError> {
        let event = parse_event(payload.as_ref(), self.config.max_action_len)?;
        self.fold(event)?;
        Ok(())
    }

    /// Validate and fold an already-decoded event
    pub fn record_event(&self, event: Event) -> Result<(), RecordError> {
        let event = event.validate(self.config.max_action_len)?;
        self.fold(event)?;
        Ok(())
    }

    fn fold(&self, event: Event) -> Result<(), InvalidInputError> {
        let Event { action, time } = event;
        let mut state = self.write_state();
        match state.get_mut(&action) {
            Some(aggregate) => aggregate.fold(time)?,
            None => {
                state.insert(action, Aggregate::new(time));
            }
        }
        Ok(())
    }

    /// Current average per action, ordered by action name
    pub fn snapshot(&self) -> Vec<ActionAverage> {
        self.read_state()
            .iter()
            .map(|(action, aggregate)| ActionAverage::from_aggregate(action, aggregate))
            .collect()
    }

    /// Current full aggregate per action, ordered by action name
    pub fn stats(&self) -> Vec<ActionStats> {
        self.read_state()
            .iter()
            .map(|(action, aggregate)| ActionStats::from_aggregate(action, aggregate))
            .collect()
    }

    /// Serialized snapshot: a JSON array of `{"action", "time"}` records.
    ///
    /// Unchanged state always serializes to identical bytes. An empty
    /// accumulator yields `[]`.
    pub fn snapshot_json(&self) -> String {
        let records = self
            .snapshot()
            .into_iter()
            .map(|entry| json!({ "action": entry.action, "time": entry.time }))
            .collect();
        Value::Array(records).to_string()
    }

    /// Number of distinct actions recorded
    pub fn len(&self) -> usize {
        self.read_state().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().is_empty()
    }

    // A fold is a handful of float updates that cannot panic part-way, so a
    // poisoned lock still guards consistent aggregates.
    fn read_state(&self) -> RwLockReadGuard<'_, BTreeMap<String, Aggregate>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Aggregate>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
