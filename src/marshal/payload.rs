use chrono::{DateTime, Utc};

use crate::types::TodoEntry;

/// Body of `POST /todo/`, deserialized after the schema pass.
#[derive(Debug, serde::Deserialize)]
pub struct TodoEntryCreation {
    /// Accepted by the schema but ignored: identifiers are assigned by the
    /// storage backend, never by the caller.
    #[serde(default)]
    pub id: Option<i64>,
    pub summary: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TodoEntryCreation> for TodoEntry {
    fn from(payload: TodoEntryCreation) -> Self {
        TodoEntry::new(
            &payload.summary,
            payload.detail.as_deref(),
            payload.created_at,
        )
    }
}

/// Body of `POST /label/`, deserialized after the schema pass.
#[derive(Debug, serde::Deserialize)]
pub struct TodoLabelCreation {
    pub name: String,
}
