//! Behaviour of the accumulator's public interface

mod common;

use actiontime::error::FormatCategory;
use actiontime::{Accumulator, ActionAverage, RecordError, MAX_ACTION_LEN};
use common::{event, parse_snapshot, record_all};

fn assert_unchanged_after(accumulator: &Accumulator, payload: &str) -> RecordError {
    let before = accumulator.snapshot_json();
    let err = accumulator.record(payload).unwrap_err();
    assert_eq!(accumulator.snapshot_json(), before, "state changed for {payload}");
    err
}

#[test]
fn test_fresh_accumulator_reports_empty_sequence() {
    let accumulator = Accumulator::new();
    assert_eq!(accumulator.snapshot_json(), "[]");
    assert_eq!(accumulator.snapshot_json(), "[]");
}

#[test]
fn test_single_event_reports_its_time() {
    let accumulator = Accumulator::new();
    accumulator.record(event("jump", 100.0)).unwrap();

    assert_eq!(
        parse_snapshot(&accumulator.snapshot_json()),
        vec![("jump".to_string(), 100.0)]
    );
}

#[test]
fn test_average_independent_of_arrival_order() {
    let orders = [
        [1.0, 2.0, 3.0],
        [3.0, 2.0, 1.0],
        [2.0, 1.0, 3.0],
        [1.0, 3.0, 2.0],
    ];

    for times in orders {
        let accumulator = Accumulator::new();
        for time in times {
            accumulator.record(event("stand", time)).unwrap();
        }

        assert_eq!(
            accumulator.snapshot(),
            vec![ActionAverage {
                action: "stand".to_string(),
                time: 2.0
            }]
        );
        let stats = &accumulator.stats()[0];
        assert_eq!((stats.count, stats.min, stats.max), (3, 1.0, 3.0));
    }
}

#[test]
fn test_snapshot_is_sorted_and_stable() {
    let accumulator = Accumulator::new();
    record_all(
        &accumulator,
        &[("walk", 4.0), ("jump", 1.0), ("stand", 2.0), ("jump", 3.0)],
    );

    let snapshot = accumulator.snapshot_json();
    insta::assert_snapshot!(
        snapshot,
        @r#"[{"action":"jump","time":2.0},{"action":"stand","time":2.0},{"action":"walk","time":4.0}]"#
    );
    assert_eq!(accumulator.snapshot_json(), snapshot);
}

#[test]
fn test_malformed_payload_is_format_error() {
    let accumulator = Accumulator::new();
    record_all(&accumulator, &[("jump", 1.0)]);

    match assert_unchanged_after(&accumulator, "{{") {
        RecordError::Format(err) => assert_eq!(err.category(), FormatCategory::Syntax),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_missing_time_is_invalid_input() {
    let accumulator = Accumulator::new();
    let err = assert_unchanged_after(&accumulator, r#"{"action": "jump"}"#);
    assert!(err.is_invalid_input());
}

#[test]
fn test_non_string_action_is_format_error() {
    let accumulator = Accumulator::new();
    let err = assert_unchanged_after(&accumulator, r#"{"action": 1, "time": 1}"#);
    assert!(err.is_format());
}

#[test]
fn test_empty_action_is_invalid_input() {
    let accumulator = Accumulator::new();
    let err = assert_unchanged_after(&accumulator, r#"{"action": "", "time": 1}"#);
    assert!(err.is_invalid_input());
}

#[test]
fn test_action_length_boundary() {
    let accumulator = Accumulator::new();

    let longest = "a".repeat(MAX_ACTION_LEN);
    accumulator
        .record(format!("{{\n  \"action\": \"{longest}\",\n  \"time\": 1\n}}"))
        .unwrap();

    let too_long = "b".repeat(MAX_ACTION_LEN + 1);
    let err = assert_unchanged_after(
        &accumulator,
        &format!("{{\n  \"action\": \"{too_long}\",\n  \"time\": 1\n}}"),
    );
    assert!(err.is_invalid_input());
}

#[test]
fn test_negative_time_is_invalid_input() {
    let accumulator = Accumulator::new();
    let err = assert_unchanged_after(&accumulator, r#"{"action": "jump", "time": -1}"#);
    assert!(err.is_invalid_input());
}

#[test]
fn test_null_payload_is_invalid_input() {
    let accumulator = Accumulator::new();
    let err = assert_unchanged_after(&accumulator, "null");
    assert!(err.is_invalid_input());
}

#[test]
fn test_extra_fields_are_tolerated() {
    let accumulator = Accumulator::new();
    accumulator
        .record(r#"{"action": "jump", "time": 100, "extra": "value"}"#)
        .unwrap();
    assert_eq!(
        parse_snapshot(&accumulator.snapshot_json()),
        vec![("jump".to_string(), 100.0)]
    );
}

#[test]
fn test_overflowing_total_is_invalid_input() {
    let accumulator = Accumulator::new();
    accumulator.record(event("jump", 1e308)).unwrap();

    let err = assert_unchanged_after(&accumulator, r#"{"action": "jump", "time": 1e308}"#);
    assert!(err.is_invalid_input());
    assert_eq!(
        parse_snapshot(&accumulator.snapshot_json()),
        vec![("jump".to_string(), 1e308)]
    );
}

#[test]
fn test_repeated_keys_keep_last_value() {
    let accumulator = Accumulator::new();
    accumulator
        .record(r#"{"action": "jump", "time": 1, "action": "stand", "time": 4}"#)
        .unwrap();
    assert_eq!(
        parse_snapshot(&accumulator.snapshot_json()),
        vec![("stand".to_string(), 4.0)]
    );
}
