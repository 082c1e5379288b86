use super::Expr;

/// An ordered object expression: key/value members, each value itself a
/// field expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    pub fields: Vec<ObjectField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub key: String,
    pub value: Expr,
}

impl Object {
    pub fn new(fields: Vec<ObjectField>) -> Self {
        Self { fields }
    }

    pub fn field(key: impl Into<String>, value: impl Into<Expr>) -> ObjectField {
        ObjectField {
            key: key.into(),
            value: value.into(),
        }
    }
}
