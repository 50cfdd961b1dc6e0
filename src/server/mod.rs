//! HTTP boundary.
//!
//! Handlers hold no state between requests; everything they need arrives
//! through [`AppState`], which is generic over the mapper implementations
//! so the same router serves both storage backends.

use axum::Router;
use axum::routing::{get, post};

pub mod endpoints;

mod errors;
pub use errors::*;

use crate::repo::{TodoEntryMapper, TodoEntryRepository, TodoLabelMapper, TodoLabelRepository};

/// Shared state injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState<EM, LM> {
    pub entries: TodoEntryRepository<EM>,
    pub labels: TodoLabelRepository<LM>,
}

impl<EM: TodoEntryMapper, LM: TodoLabelMapper> AppState<EM, LM> {
    pub fn new(entries: TodoEntryRepository<EM>, labels: TodoLabelRepository<LM>) -> Self {
        Self { entries, labels }
    }
}

/// Builds the service router over the provided state.
pub fn router<EM: TodoEntryMapper, LM: TodoLabelMapper>(state: AppState<EM, LM>) -> Router {
    Router::new()
        .route("/todo/", post(endpoints::create_todo::<EM, LM>))
        .route(
            "/todo/{id}",
            get(endpoints::get_todo::<EM, LM>).patch(endpoints::update_todo::<EM, LM>),
        )
        .route("/label/", post(endpoints::create_label::<EM, LM>))
        .with_state(state)
}
