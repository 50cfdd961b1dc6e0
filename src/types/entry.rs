use chrono::{DateTime, Utc};

use crate::types::TodoLabel;

/// A single todo record.
///
/// The identifier is assigned by the storage backend on creation; callers
/// never supply it. After creation the only mutable field is the label
/// reference, replaced through [`EntryChanges`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TodoEntry {
    pub id: Option<i64>,
    pub summary: String,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub label: Option<TodoLabel>,
}

impl TodoEntry {
    pub fn new(summary: &str, detail: Option<&str>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            summary: summary.to_owned(),
            detail: detail.map(str::to_owned),
            created_at,
            label: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Change set accepted by the entry update path.
///
/// Attaching a label is the only mutation the system supports, so the set
/// carries exactly the referenced label identifier.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct EntryChanges {
    pub label_id: i64,
}
