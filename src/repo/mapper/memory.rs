use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::Rng;

use super::{MapperError, TodoEntryMapper, TodoLabelMapper};
use crate::store::{MemoryStore, Record};
use crate::types::{EntryChanges, TodoEntry, TodoLabel};

/// Id range reserved for entries in the shared map.
const ENTRY_ID_RANGE: RangeInclusive<i64> = 1..=10_000;
/// Id range reserved for labels, disjoint from the entry range.
const LABEL_ID_RANGE: RangeInclusive<i64> = 10_101..=20_000;

/// Upper bound on collision re-draws before the insert is reported as
/// failed. The ranges hold ten thousand ids each, so hitting this bound
/// means the range is effectively exhausted.
const MAX_ID_DRAWS: usize = 10_000;

/// Draws an id uniformly at random from `range`, re-drawing on collision
/// with an occupied slot. The caller must hold the store's write guard, so
/// the drawn id stays free until the matching insert.
fn draw_unique_id(
    records: &HashMap<i64, Record>,
    range: RangeInclusive<i64>,
) -> Result<i64, MapperError> {
    let mut rng = rand::rng();

    for _ in 0..MAX_ID_DRAWS {
        let identifier = rng.random_range(range.clone());
        if !records.contains_key(&identifier) {
            return Ok(identifier);
        }
    }

    Err(MapperError::CreateFailed(format!(
        "id range {}..={} is exhausted",
        range.start(),
        range.end()
    )))
}

/// [`TodoEntry`] mapper over the process-local guarded map.
#[derive(Debug, Clone)]
pub struct MemoryTodoEntryMapper {
    store: MemoryStore,
}

impl MemoryTodoEntryMapper {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl TodoEntryMapper for MemoryTodoEntryMapper {
    async fn get(&self, identifier: i64) -> Result<TodoEntry, MapperError> {
        match self.store.get(identifier).await {
            Some(Record::Entry(entity)) => Ok(entity),
            _ => Err(MapperError::EntityNotFound(identifier)),
        }
    }

    async fn create(&self, entity: TodoEntry) -> Result<TodoEntry, MapperError> {
        self.store
            .mutate(|records| {
                let identifier = draw_unique_id(records, ENTRY_ID_RANGE)?;
                let entity = entity.with_id(identifier);
                records.insert(identifier, Record::Entry(entity.clone()));
                Ok(entity)
            })
            .await
    }

    async fn update(&self, identifier: i64, changes: EntryChanges) -> Result<TodoEntry, MapperError> {
        self.store
            .mutate(|records| {
                // Resolve the label before touching the entry, so a missing
                // label leaves the entry unmodified.
                let label = match records.get(&changes.label_id) {
                    Some(Record::Label(label)) => label.clone(),
                    _ => {
                        return Err(MapperError::UpdateFailed(format!(
                            "label `id:{}` was not found",
                            changes.label_id
                        )));
                    }
                };

                match records.get_mut(&identifier) {
                    Some(Record::Entry(entity)) => {
                        entity.label = Some(label);
                        Ok(entity.clone())
                    }
                    _ => Err(MapperError::UpdateFailed(format!(
                        "entity `id:{identifier}` was not found"
                    ))),
                }
            })
            .await
    }
}

/// [`TodoLabel`] mapper over the process-local guarded map.
#[derive(Debug, Clone)]
pub struct MemoryTodoLabelMapper {
    store: MemoryStore,
}

impl MemoryTodoLabelMapper {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl TodoLabelMapper for MemoryTodoLabelMapper {
    async fn create(&self, value_object: TodoLabel) -> Result<TodoLabel, MapperError> {
        self.store
            .mutate(|records| {
                let identifier = draw_unique_id(records, LABEL_ID_RANGE)?;
                let value_object = value_object.with_id(identifier);
                records.insert(identifier, Record::Label(value_object.clone()));
                Ok(value_object)
            })
            .await
    }
}
