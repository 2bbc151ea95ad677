//! Report records produced by snapshots

use super::aggregate::Aggregate;
use serde::{Deserialize, Serialize};

/// One entry of the reporting interface: the all-time average for an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionAverage {
    pub action: String,
    /// Average of every time recorded for `action`
    pub time: f64,
}

impl ActionAverage {
    pub(crate) fn from_aggregate(action: &str, aggregate: &Aggregate) -> Self {
        Self {
            action: action.to_string(),
            time: aggregate.average(),
        }
    }
}

/// Extended report entry exposing the full aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStats {
    pub action: String,
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl ActionStats {
    pub(crate) fn from_aggregate(action: &str, aggregate: &Aggregate) -> Self {
        Self {
            action: action.to_string(),
            count: aggregate.count(),
            min: aggregate.min(),
            max: aggregate.max(),
            average: aggregate.average(),
        }
    }
}
