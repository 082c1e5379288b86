use super::Expr;

/// One insert row: an ordered sequence of field expressions.
///
/// For the relational model the length must match the projection (when one
/// was given) and be non-zero; for the document model it must be exactly
/// one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub fields: Vec<Expr>,
}

impl Row {
    pub fn new(fields: Vec<Expr>) -> Self {
        Self { fields }
    }
}

impl From<Vec<Expr>> for Row {
    fn from(fields: Vec<Expr>) -> Self {
        Row::new(fields)
    }
}
