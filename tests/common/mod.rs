//! Common test utilities and helpers

#![allow(dead_code)]

use actiontime::Accumulator;
use serde_json::json;

/// Encode a well-formed event payload
pub fn event(action: &str, time: f64) -> String {
    json!({ "action": action, "time": time }).to_string()
}

/// Record a batch of events that are all expected to be accepted
pub fn record_all(accumulator: &Accumulator, events: &[(&str, f64)]) {
    for (action, time) in events {
        accumulator
            .record(event(action, *time))
            .unwrap_or_else(|e| panic!("event ({action}, {time}) rejected: {e}"));
    }
}

/// Parse a serialized snapshot back into `(action, time)` pairs
pub fn parse_snapshot(snapshot: &str) -> Vec<(String, f64)> {
    let records: Vec<serde_json::Value> = serde_json::from_str(snapshot).unwrap();
    records
        .into_iter()
        .map(|record| {
            (
                record["action"].as_str().unwrap().to_string(),
                record["time"].as_f64().unwrap(),
            )
        })
        .collect()
}
