/// Reference to a target table or document collection.
///
/// Opaque to statement building beyond identifier rendering: the name, and
/// the schema when the request qualifies one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Schema qualifying the collection, if any.
    pub schema: Option<String>,

    /// Name of the table or collection.
    pub name: String,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for Collection {
    fn from(value: &str) -> Self {
        Collection::new(value)
    }
}
