/// A named tag attached to todo entries after the fact.
///
/// Labels are created independently of entries; the name is required and
/// length-bounded but carries no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TodoLabel {
    pub id: Option<i64>,
    pub name: String,
}

impl TodoLabel {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
