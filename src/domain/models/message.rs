//! Upstream message records and the cached snapshot of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A single message record as received from the upstream API.
///
/// Only `message` takes part in search. Everything else the upstream sends
/// is kept in `extra` so records survive a round trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Searchable text content. Absent on some upstream records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Remaining upstream fields, such as `id` and `user_name`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Create a message carrying only text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            extra: Map::new(),
        }
    }

    /// Text content, if the record has any.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Case-insensitive substring match against an already lowercased needle.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    }
}

/// Body shape returned by the upstream: `{"items": [...], "total": n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEnvelope {
    /// Message records in upstream order
    pub items: Vec<Message>,

    /// Upstream item count, informational only
    #[serde(default)]
    pub total: Option<u64>,
}

/// Snapshot of the full upstream collection and the time it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The collection as fetched
    pub items: Arc<Vec<Message>>,
    /// When the fetch completed
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Snapshot `items`, stamped with the current time.
    pub fn new(items: Arc<Vec<Message>>) -> Self {
        Self {
            items,
            fetched_at: Utc::now(),
        }
    }
}
