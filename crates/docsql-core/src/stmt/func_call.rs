use super::Expr;

/// A function call expression, rendered opaquely by the generic expression
/// renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    /// Function name, emitted verbatim.
    pub name: String,

    /// Positional arguments.
    pub args: Vec<Expr>,
}

impl FuncCall {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}
