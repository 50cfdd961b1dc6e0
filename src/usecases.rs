//! One use case per public behavior.
//!
//! Each function performs exactly one repository call and translates the
//! repository failure into the use-case taxonomy: a missing entity becomes
//! [`UseCaseError::NotFound`], everything else the generic
//! [`UseCaseError::Internal`]. No cross-entity orchestration happens here.

use crate::repo::{RepositoryError, TodoEntryMapper, TodoEntryRepository, TodoLabelMapper, TodoLabelRepository};
use crate::types::{EntryChanges, TodoEntry, TodoLabel};

#[derive(thiserror::Error, Debug)]
pub enum UseCaseError {
    #[error("not found :: {0}")]
    NotFound(#[source] RepositoryError),
    #[error("use case failed :: {0}")]
    Internal(#[source] RepositoryError),
}

fn translate(error: RepositoryError) -> UseCaseError {
    match &error {
        RepositoryError::EntityNotFound(_) => UseCaseError::NotFound(error),
        _ => UseCaseError::Internal(error),
    }
}

pub async fn get_todo_entry<M: TodoEntryMapper>(
    identifier: i64,
    repository: &TodoEntryRepository<M>,
) -> Result<TodoEntry, UseCaseError> {
    repository.get(identifier).await.map_err(translate)
}

pub async fn create_todo_entry<M: TodoEntryMapper>(
    entity: TodoEntry,
    repository: &TodoEntryRepository<M>,
) -> Result<TodoEntry, UseCaseError> {
    repository.create(entity).await.map_err(translate)
}

pub async fn update_todo_entry<M: TodoEntryMapper>(
    identifier: i64,
    changes: EntryChanges,
    repository: &TodoEntryRepository<M>,
) -> Result<TodoEntry, UseCaseError> {
    repository.update(identifier, changes).await.map_err(translate)
}

pub async fn create_todo_label<M: TodoLabelMapper>(
    value_object: TodoLabel,
    repository: &TodoLabelRepository<M>,
) -> Result<TodoLabel, UseCaseError> {
    repository.create(value_object).await.map_err(translate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{MemoryTodoEntryMapper, MemoryTodoLabelMapper};
    use crate::store::{MemoryStore, Record};

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert(
                1,
                Record::Entry(TodoEntry::new("Lorem Ipsum", None, chrono::Utc::now()).with_id(1)),
            )
            .await;
        store
            .insert(10_001, Record::Label(TodoLabel::new("Lorem").with_id(10_001)))
            .await;
        store
    }

    fn entry_repository(store: MemoryStore) -> TodoEntryRepository<MemoryTodoEntryMapper> {
        TodoEntryRepository::new(MemoryTodoEntryMapper::new(store))
    }

    #[tokio::test]
    async fn get_existing_entry() {
        let repository = entry_repository(seeded_store().await);

        let entity = get_todo_entry(1, &repository).await.unwrap();
        assert_eq!(entity.id, Some(1));
        assert_eq!(entity.summary, "Lorem Ipsum");
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let repository = entry_repository(seeded_store().await);

        let error = get_todo_entry(42, &repository).await.unwrap_err();
        assert!(matches!(error, UseCaseError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_entry_assigns_id() {
        let repository = entry_repository(seeded_store().await);

        let data = TodoEntry::new("Lorem Ipsum", None, chrono::Utc::now());
        let entity = create_todo_entry(data, &repository).await.unwrap();
        assert!(entity.id.is_some());
    }

    #[tokio::test]
    async fn update_attaches_label() {
        let repository = entry_repository(seeded_store().await);

        let entity = update_todo_entry(1, EntryChanges { label_id: 10_001 }, &repository)
            .await
            .unwrap();
        assert_eq!(entity.label.unwrap().name, "Lorem");
    }

    #[tokio::test]
    async fn update_with_missing_label_is_generic_failure() {
        let repository = entry_repository(seeded_store().await);

        let error = update_todo_entry(1, EntryChanges { label_id: 99_999 }, &repository)
            .await
            .unwrap_err();
        assert!(matches!(error, UseCaseError::Internal(_)));

        // No partial mutation happened.
        let entity = get_todo_entry(1, &repository).await.unwrap();
        assert!(entity.label.is_none());
    }

    #[tokio::test]
    async fn create_label() {
        let repository = TodoLabelRepository::new(MemoryTodoLabelMapper::new(seeded_store().await));

        let value_object = create_todo_label(TodoLabel::new("Lorem"), &repository)
            .await
            .unwrap();
        assert_eq!(value_object.name, "Lorem");
        assert!(value_object.id.is_some());
    }
}
