use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use log::{info, trace};

use crate::marshal::{self, TodoLabelCreation};
use crate::repo::{TodoEntryMapper, TodoLabelMapper};
use crate::server::{AppState, ServerError};
use crate::types::TodoLabel;
use crate::usecases;

/// Handler for `POST /label/`: creates a new label.
pub async fn create_label<EM: TodoEntryMapper, LM: TodoLabelMapper>(
    State(state): State<AppState<EM, LM>>,
    Json(raw_data): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<TodoLabel>), ServerError> {
    info!("requested todo label creation");

    if let Some(error) = marshal::validate_todo_label(&raw_data) {
        return Err(ServerError::Validation(error));
    }

    let payload: TodoLabelCreation = serde_json::from_value(raw_data)?;
    let value_object = usecases::create_todo_label(TodoLabel::new(&payload.name), &state.labels).await?;

    trace!("created todo label `id:{:?}`", value_object.id);

    Ok((StatusCode::CREATED, Json(value_object)))
}
