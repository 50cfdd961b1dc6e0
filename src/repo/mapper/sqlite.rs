use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use super::{MapperError, TodoEntryMapper, TodoLabelMapper};
use crate::types::{EntryChanges, TodoEntry, TodoLabel};

const ENTRY_SELECT: &str = r#"
    SELECT e.id, e.summary, e.detail, e.created_at, l.id AS label_id, l.name AS label_name
    FROM todo_entries AS e
    LEFT JOIN todo_labels AS l ON l.id = e.label_id
    WHERE e.id = ?1
"#;

fn cast_entry_row(row: &SqliteRow) -> Result<TodoEntry, sqlx::Error> {
    let label = match (
        row.try_get::<Option<i64>, _>("label_id")?,
        row.try_get::<Option<String>, _>("label_name")?,
    ) {
        (Some(id), Some(name)) => Some(TodoLabel { id: Some(id), name }),
        _ => None,
    };

    Ok(TodoEntry {
        id: row.try_get("id")?,
        summary: row.try_get("summary")?,
        detail: row.try_get("detail")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        label,
    })
}

/// [`TodoEntry`] mapper over the sqlite backend.
///
/// Every operation acquires one pooled connection scoped to that call; no
/// transaction spans multiple mapper calls. Identifier assignment is
/// delegated to sqlite's autoincrement primary keys.
#[derive(Debug, Clone)]
pub struct SqliteTodoEntryMapper {
    pool: SqlitePool,
}

impl SqliteTodoEntryMapper {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TodoEntryMapper for SqliteTodoEntryMapper {
    async fn get(&self, identifier: i64) -> Result<TodoEntry, MapperError> {
        let mut session = self
            .pool
            .acquire()
            .await
            .map_err(|_| MapperError::EntityNotFound(identifier))?;

        let row = sqlx::query(ENTRY_SELECT)
            .bind(identifier)
            .fetch_optional(&mut *session)
            .await
            .map_err(|_| MapperError::EntityNotFound(identifier))?
            .ok_or(MapperError::EntityNotFound(identifier))?;

        cast_entry_row(&row).map_err(|_| MapperError::EntityNotFound(identifier))
    }

    async fn create(&self, entity: TodoEntry) -> Result<TodoEntry, MapperError> {
        let mut session = self
            .pool
            .acquire()
            .await
            .map_err(|e| MapperError::CreateFailed(e.to_string()))?;

        let row = sqlx::query(
            r#"INSERT INTO todo_entries (summary, detail, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id"#,
        )
        .bind(&entity.summary)
        .bind(&entity.detail)
        .bind(entity.created_at)
        .fetch_one(&mut *session)
        .await
        .map_err(|e| MapperError::CreateFailed(e.to_string()))?;

        let identifier: i64 = row
            .try_get("id")
            .map_err(|e| MapperError::CreateFailed(e.to_string()))?;

        Ok(entity.with_id(identifier))
    }

    async fn update(&self, identifier: i64, changes: EntryChanges) -> Result<TodoEntry, MapperError> {
        let update_failed = |msg: String| MapperError::UpdateFailed(msg);

        let mut session = self
            .pool
            .acquire()
            .await
            .map_err(|e| update_failed(e.to_string()))?;

        // The entry must exist before anything else is checked.
        sqlx::query("SELECT id FROM todo_entries WHERE id = ?1")
            .bind(identifier)
            .fetch_optional(&mut *session)
            .await
            .map_err(|e| update_failed(e.to_string()))?
            .ok_or_else(|| update_failed(format!("entity `id:{identifier}` was not found")))?;

        // The referenced label must exist; a missing label leaves the entry
        // unmodified.
        sqlx::query("SELECT id FROM todo_labels WHERE id = ?1")
            .bind(changes.label_id)
            .fetch_optional(&mut *session)
            .await
            .map_err(|e| update_failed(e.to_string()))?
            .ok_or_else(|| {
                update_failed(format!("label `id:{}` was not found", changes.label_id))
            })?;

        sqlx::query("UPDATE todo_entries SET label_id = ?1 WHERE id = ?2")
            .bind(changes.label_id)
            .bind(identifier)
            .execute(&mut *session)
            .await
            .map_err(|e| update_failed(e.to_string()))?;

        let row = sqlx::query(ENTRY_SELECT)
            .bind(identifier)
            .fetch_one(&mut *session)
            .await
            .map_err(|e| update_failed(e.to_string()))?;

        cast_entry_row(&row).map_err(|e| update_failed(e.to_string()))
    }
}

/// [`TodoLabel`] mapper over the sqlite backend.
#[derive(Debug, Clone)]
pub struct SqliteTodoLabelMapper {
    pool: SqlitePool,
}

impl SqliteTodoLabelMapper {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TodoLabelMapper for SqliteTodoLabelMapper {
    async fn create(&self, value_object: TodoLabel) -> Result<TodoLabel, MapperError> {
        let mut session = self
            .pool
            .acquire()
            .await
            .map_err(|e| MapperError::CreateFailed(e.to_string()))?;

        let row = sqlx::query("INSERT INTO todo_labels (name) VALUES (?1) RETURNING id")
            .bind(&value_object.name)
            .fetch_one(&mut *session)
            .await
            .map_err(|e| MapperError::CreateFailed(e.to_string()))?;

        let identifier: i64 = row
            .try_get("id")
            .map_err(|e| MapperError::CreateFailed(e.to_string()))?;

        Ok(value_object.with_id(identifier))
    }
}
