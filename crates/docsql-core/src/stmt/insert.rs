use super::{Collection, DataModel, Row, Scalar};

/// A protocol-level INSERT request.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table or document collection.
    pub collection: Collection,

    /// Data model governing validation and rendering. Set once per request.
    pub data_model: DataModel,

    /// Explicit column list. Only legal for the relational model.
    pub projection: Vec<String>,

    /// Rows to insert. Must be non-empty.
    pub rows: Vec<Row>,

    /// Request-scoped bound argument list, resolved by placeholders.
    pub args: Vec<Scalar>,

    /// Update the stored document on key conflict instead of failing. Only
    /// legal for the document model.
    pub upsert: bool,
}

impl Insert {
    /// An insert against a relational table.
    pub fn relational(collection: impl Into<Collection>) -> Self {
        Self {
            collection: collection.into(),
            data_model: DataModel::Relational,
            projection: vec![],
            rows: vec![],
            args: vec![],
            upsert: false,
        }
    }

    /// An insert against a document collection.
    pub fn document(collection: impl Into<Collection>) -> Self {
        Self {
            collection: collection.into(),
            data_model: DataModel::Document,
            projection: vec![],
            rows: vec![],
            args: vec![],
            upsert: false,
        }
    }
}
