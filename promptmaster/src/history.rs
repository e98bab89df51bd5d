//! Optimization history records and the optimize request/response shapes.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/optimize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub original_prompt: String,
    pub category: String,
}

impl OptimizeRequest {
    pub fn new(original_prompt: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            category: category.into(),
        }
    }
}

/// One past optimization. Created once, never mutated, only deleted.
///
/// `timestamp` is RFC 3339 UTC, so lexical order is chronological order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub category: String,
    pub timestamp: String,
}

/// The optimize response has exactly the shape of the stored history item.
pub type OptimizeResponse = HistoryItem;

impl HistoryItem {
    /// New item with a fresh UUID v4 id and the current UTC time.
    pub fn new(
        original_prompt: impl Into<String>,
        optimized_prompt: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            original_prompt: original_prompt.into(),
            optimized_prompt: optimized_prompt.into(),
            category: category.into(),
            timestamp: now_rfc3339(),
        }
    }
}

/// Current UTC time with microsecond precision and a `+00:00` offset.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
