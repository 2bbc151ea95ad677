//! Event decoding and validation
//!
//! Decoding is strict about types and lenient about unknown keys. Anything the
//! decoder cannot make sense of becomes a [`FormatError`]; a payload that decodes
//! but breaks a semantic rule becomes an [`InvalidInputError`].

use crate::error::{FormatError, InvalidInputError, RecordError};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// A single timed action, as accepted by the accumulator
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub action: String,
    pub time: f64,
}

impl Event {
    pub fn new(action: impl Into<String>, time: f64) -> Self {
        Self {
            action: action.into(),
            time,
        }
    }

    /// Apply the semantic rules to an already-built event, returning it with
    /// negative zero normalized to zero
    pub fn validate(mut self, max_action_len: usize) -> Result<Self, InvalidInputError> {
        if self.action.is_empty() {
            return Err(InvalidInputError::empty_action());
        }

        let len = self.action.chars().count();
        if len > max_action_len {
            return Err(InvalidInputError::action_too_long(len, max_action_len));
        }

        if !self.time.is_finite() {
            return Err(InvalidInputError::new(format!(
                "time must be a finite number, got {}",
                self.time
            )));
        }

        if self.time < 0.0 {
            return Err(InvalidInputError::negative_time(self.time));
        }

        // -0.0 passes the sign check above
        if self.time == 0.0 {
            self.time = 0.0;
        }

        Ok(self)
    }
}

/// Decode and validate one encoded event payload
pub fn parse_event(payload: &[u8], max_action_len: usize) -> Result<Event, RecordError> {
    let raw = serde_json::from_slice::<Option<RawEvent>>(payload).map_err(FormatError::from)?;
    let raw = raw.ok_or_else(InvalidInputError::null_payload)?;

    let action = raw
        .action
        .ok_or_else(|| InvalidInputError::missing_field("action"))?;
    let time = raw
        .time
        .ok_or_else(|| InvalidInputError::missing_field("time"))?;

    let event = Event { action, time }.validate(max_action_len)?;
    Ok(event)
}

/// Structurally decoded payload; a field is `None` when absent or null
#[derive(Debug, Default)]
struct RawEvent {
    action: Option<String>,
    time: Option<f64>,
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Action,
    Time,
    #[serde(other)]
    Unknown,
}

impl<'de> Deserialize<'de> for RawEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only maps are accepted, so a JSON array is a type error rather than a
        // positional record
        deserializer.deserialize_map(RawEventVisitor)
    }
}

/// Field visitor for [`RawEvent`]. A repeated key overwrites the earlier
/// value, so the last occurrence wins.
struct RawEventVisitor;

impl<'de> Visitor<'de> for RawEventVisitor {
    type Value = RawEvent;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an event object with 'action' and 'time' fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut raw = RawEvent::default();

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Action => raw.action = map.next_value()?,
                Field::Time => raw.time = map.next_value()?,
                Field::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(raw)
    }
}
