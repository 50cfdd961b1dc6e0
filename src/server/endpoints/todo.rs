use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use log::{info, trace};

use crate::marshal::{self, TodoEntryCreation};
use crate::repo::{TodoEntryMapper, TodoLabelMapper};
use crate::server::{AppState, ServerError};
use crate::types::{EntryChanges, TodoEntry};
use crate::usecases;

/// Handler for `POST /todo/`: creates a new entry.
pub async fn create_todo<EM: TodoEntryMapper, LM: TodoLabelMapper>(
    State(state): State<AppState<EM, LM>>,
    Json(raw_data): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<TodoEntry>), ServerError> {
    info!("requested todo entry creation");

    if let Some(error) = marshal::validate_todo_entry_creation(&raw_data) {
        return Err(ServerError::Validation(error));
    }

    let payload: TodoEntryCreation = serde_json::from_value(raw_data)?;
    let entity = usecases::create_todo_entry(payload.into(), &state.entries).await?;

    trace!("created todo entry `id:{:?}`", entity.id);

    Ok((StatusCode::CREATED, Json(entity)))
}

/// Handler for `GET /todo/{id}`: finds an entry by id.
pub async fn get_todo<EM: TodoEntryMapper, LM: TodoLabelMapper>(
    State(state): State<AppState<EM, LM>>,
    Path(identifier): Path<i64>,
) -> Result<Json<TodoEntry>, ServerError> {
    info!("requested todo entry `id:{identifier}`");

    let entity = usecases::get_todo_entry(identifier, &state.entries).await?;

    Ok(Json(entity))
}

/// Handler for `PATCH /todo/{id}`: attaches a label to an entry.
pub async fn update_todo<EM: TodoEntryMapper, LM: TodoLabelMapper>(
    State(state): State<AppState<EM, LM>>,
    Path(identifier): Path<i64>,
    Json(raw_data): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<TodoEntry>), ServerError> {
    info!("requested label attachment for todo entry `id:{identifier}`");

    if let Some(error) = marshal::validate_todo_entry_update(&raw_data) {
        return Err(ServerError::Validation(error));
    }

    let changes: EntryChanges = serde_json::from_value(raw_data)?;
    let entity = usecases::update_todo_entry(identifier, changes, &state.entries).await?;

    trace!(
        "attached label `id:{}` to todo entry `id:{identifier}`",
        changes.label_id
    );

    Ok((StatusCode::CREATED, Json(entity)))
}
