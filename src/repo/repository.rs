use super::mapper::{MapperError, TodoEntryMapper, TodoLabelMapper};
use crate::types::{EntryChanges, TodoEntry, TodoLabel};

/// Backend-opaque persistence failures, re-wrapped 1:1 from [`MapperError`].
#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("entity not found :: {0}")]
    EntityNotFound(#[source] MapperError),
    #[error("create error :: {0}")]
    Create(#[source] MapperError),
    #[error("update error :: {0}")]
    Update(#[source] MapperError),
}

fn translate(error: MapperError) -> RepositoryError {
    match &error {
        MapperError::EntityNotFound(_) => RepositoryError::EntityNotFound(error),
        MapperError::CreateFailed(_) => RepositoryError::Create(error),
        MapperError::UpdateFailed(_) => RepositoryError::Update(error),
    }
}

/// Backend-agnostic facade over one [`TodoEntryMapper`].
///
/// Every method forwards to the mapper and translates its error kind; no
/// business logic lives here.
#[derive(Debug, Clone)]
pub struct TodoEntryRepository<M> {
    mapper: M,
}

impl<M: TodoEntryMapper> TodoEntryRepository<M> {
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    pub async fn get(&self, identifier: i64) -> Result<TodoEntry, RepositoryError> {
        self.mapper.get(identifier).await.map_err(translate)
    }

    pub async fn create(&self, entity: TodoEntry) -> Result<TodoEntry, RepositoryError> {
        self.mapper.create(entity).await.map_err(translate)
    }

    pub async fn update(
        &self,
        identifier: i64,
        changes: EntryChanges,
    ) -> Result<TodoEntry, RepositoryError> {
        self.mapper.update(identifier, changes).await.map_err(translate)
    }
}

/// Backend-agnostic facade over one [`TodoLabelMapper`].
#[derive(Debug, Clone)]
pub struct TodoLabelRepository<M> {
    mapper: M,
}

impl<M: TodoLabelMapper> TodoLabelRepository<M> {
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    pub async fn create(&self, value_object: TodoLabel) -> Result<TodoLabel, RepositoryError> {
        self.mapper.create(value_object).await.map_err(translate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::mapper::{MemoryTodoEntryMapper, MemoryTodoLabelMapper};
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

    #[tokio::test]
    async fn get_todo_entry() {
        let repository = TodoEntryRepository::new(MemoryTodoEntryMapper::new(seeded_store().await));

        let entity = repository.get(1).await.unwrap();
        assert_eq!(entity.id, Some(1));
    }

    #[tokio::test]
    async fn missing_entry_maps_to_not_found() {
        let repository = TodoEntryRepository::new(MemoryTodoEntryMapper::new(seeded_store().await));

        let error = repository.get(42).await.unwrap_err();
        assert!(matches!(error, RepositoryError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn save_todo_entry() {
        let repository = TodoEntryRepository::new(MemoryTodoEntryMapper::new(seeded_store().await));

        let data = TodoEntry::new(
            "Buy flowers to my wife",
            Some("We have marriage anniversary"),
            chrono::Utc::now(),
        );

        let entity = repository.create(data).await.unwrap();
        assert!(entity.id.unwrap() >= 1);
    }

    #[tokio::test]
    async fn attach_label_to_entry() {
        let repository = TodoEntryRepository::new(MemoryTodoEntryMapper::new(seeded_store().await));

        let entity = repository
            .update(1, EntryChanges { label_id: 10_001 })
            .await
            .unwrap();
        assert_eq!(entity.id, Some(1));
        assert_eq!(entity.label.unwrap().id, Some(10_001));
    }

    #[tokio::test]
    async fn failed_update_maps_to_update_error() {
        let repository = TodoEntryRepository::new(MemoryTodoEntryMapper::new(MemoryStore::new()));

        let error = repository
            .update(1, EntryChanges { label_id: 10_001 })
            .await
            .unwrap_err();
        assert!(matches!(error, RepositoryError::Update(_)));
    }

    #[tokio::test]
    async fn save_todo_label() {
        let repository = TodoLabelRepository::new(MemoryTodoLabelMapper::new(seeded_store().await));

        let value_object = repository.create(TodoLabel::new("Lorem Ipsum")).await.unwrap();
        assert_eq!(value_object.name, "Lorem Ipsum");
        assert!(value_object.id.is_some());
    }
}
