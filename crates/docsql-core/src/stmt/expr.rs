use super::{FuncCall, Object, Scalar};

/// A field expression within an insert row.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An inline scalar literal.
    Literal(Scalar),

    /// Zero-based index into the request's bound argument list, resolved at
    /// build time.
    Placeholder(u32),

    /// A nested object expression.
    Object(Object),

    /// An array expression.
    Array(Vec<Expr>),

    /// A function call expression.
    FuncCall(FuncCall),
}

impl From<Scalar> for Expr {
    fn from(value: Scalar) -> Self {
        Expr::Literal(value)
    }
}

impl From<Object> for Expr {
    fn from(value: Object) -> Self {
        Expr::Object(value)
    }
}

impl From<FuncCall> for Expr {
    fn from(value: FuncCall) -> Self {
        Expr::FuncCall(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(value.into())
    }
}
