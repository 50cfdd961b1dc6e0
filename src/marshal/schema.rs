use std::sync::LazyLock;

use serde_json::{Value, json};

/// Schema for `POST /todo/` bodies. The optional `id` property is accepted
/// for compatibility but ignored: identifiers are backend-assigned.
pub static TODO_ENTRY_CREATION_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": ["summary", "created_at"],
        "properties": {
            "id": {"type": "integer", "minimum": 1, "maximum": 10_000},
            "summary": {"type": "string", "minLength": 3, "maxLength": 26},
            "detail": {"type": "string", "maxLength": 255},
            "created_at": {"type": "string", "format": "date-time"},
        },
    })
});

/// Schema for `PATCH /todo/{id}` bodies.
pub static TODO_ENTRY_UPDATING_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": ["label_id"],
        "properties": {
            "label_id": {"type": "integer", "minimum": 1},
        },
    })
});

/// Schema for `POST /label/` bodies.
pub static TODO_LABEL_CREATION_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"type": "string", "minLength": 3, "maxLength": 26},
        },
    })
});
