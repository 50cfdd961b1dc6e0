use std::sync::LazyLock;

use jsonschema::Validator;
use serde_json::Value;

use super::schema::{
    TODO_ENTRY_CREATION_SCHEMA, TODO_ENTRY_UPDATING_SCHEMA, TODO_LABEL_CREATION_SCHEMA,
};

static TODO_ENTRY_CREATION_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&TODO_ENTRY_CREATION_SCHEMA)
        .expect("BUG: invalid builtin todo entry creation schema")
});

static TODO_ENTRY_UPDATING_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&TODO_ENTRY_UPDATING_SCHEMA)
        .expect("BUG: invalid builtin todo entry updating schema")
});

static TODO_LABEL_CREATION_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&TODO_LABEL_CREATION_SCHEMA)
        .expect("BUG: invalid builtin todo label creation schema")
});

/// Structured diagnostic for one schema violation, serialized verbatim into
/// 422 response bodies.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SchemaError {
    /// Always `"Validation error"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    /// The violated subschema fragment (e.g. the constraints of the
    /// offending property).
    pub validation_schema: Value,
    /// Dotted location of the offending field within the submitted
    /// document; empty for document-level violations.
    pub path: String,
}

/// Converts a JSON Pointer instance location (`/label/name`) into the
/// dotted form reported to clients (`label.name`).
fn dotted_path(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}

/// Resolves the subschema the offending field was validated against. For
/// document-level violations (empty path) the whole schema is reported.
fn subschema_at<'a>(schema: &'a Value, path: &str) -> &'a Value {
    if path.is_empty() {
        return schema;
    }

    let mut current = schema;
    for segment in path.split('.') {
        match current.get("properties").and_then(|p| p.get(segment)) {
            Some(subschema) => current = subschema,
            None => return schema,
        }
    }
    current
}

fn validate(raw_data: &Value, schema: &Value, validator: &Validator) -> Option<SchemaError> {
    let error = validator.iter_errors(raw_data).next()?;

    let path = dotted_path(&error.instance_path.to_string());

    Some(SchemaError {
        kind: "Validation error".to_owned(),
        message: error.to_string(),
        validation_schema: subschema_at(schema, &path).clone(),
        path,
    })
}

pub fn validate_todo_entry_creation(raw_data: &Value) -> Option<SchemaError> {
    validate(
        raw_data,
        &TODO_ENTRY_CREATION_SCHEMA,
        &TODO_ENTRY_CREATION_VALIDATOR,
    )
}

pub fn validate_todo_entry_update(raw_data: &Value) -> Option<SchemaError> {
    validate(
        raw_data,
        &TODO_ENTRY_UPDATING_SCHEMA,
        &TODO_ENTRY_UPDATING_VALIDATOR,
    )
}

pub fn validate_todo_label(raw_data: &Value) -> Option<SchemaError> {
    validate(
        raw_data,
        &TODO_LABEL_CREATION_SCHEMA,
        &TODO_LABEL_CREATION_VALIDATOR,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn short_summary_in_todo_entry() {
        let data = json!({
            "summary": "Lo",
            "detail": "",
            "created_at": "2022-09-05T18:07:19.280040+00:00",
        });

        let error = validate_todo_entry_creation(&data).unwrap();
        assert_eq!(error.path, "summary");
        assert!(error.validation_schema.get("minLength").is_some());
        assert!(error.validation_schema.get("maxLength").is_some());
        assert!(error.validation_schema.get("type").is_some());
    }

    #[test]
    fn short_name_in_todo_label() {
        let data = json!({"name": "Lo"});

        let error = validate_todo_label(&data).unwrap();
        assert_eq!(error.path, "name");
        assert!(error.validation_schema.get("minLength").is_some());
        assert!(error.validation_schema.get("maxLength").is_some());
        assert!(error.validation_schema.get("type").is_some());
    }

    #[test]
    fn valid_todo_entry_passes() {
        let data = json!({
            "summary": "Lorem Ipsum",
            "detail": "Lorem ipsum dolor sit amet.",
            "created_at": "2022-09-05T18:07:19.280040+00:00",
        });

        assert!(validate_todo_entry_creation(&data).is_none());
    }

    #[test]
    fn missing_required_field_reports_document_path() {
        let data = json!({"detail": "no summary here"});

        let error = validate_todo_entry_creation(&data).unwrap();
        assert_eq!(error.path, "");
        // Document-level violations report the whole schema.
        assert!(error.validation_schema.get("required").is_some());
    }

    #[test]
    fn update_requires_integer_label_id() {
        let error = validate_todo_entry_update(&json!({"label_id": "10001"})).unwrap();
        assert_eq!(error.path, "label_id");
        assert!(error.validation_schema.get("type").is_some());

        assert!(validate_todo_entry_update(&json!({"label_id": 10_001})).is_none());
    }
}
