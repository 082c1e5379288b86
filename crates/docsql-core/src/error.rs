use std::fmt;

/// An error raised while translating a protocol statement to SQL.
///
/// Statement building is fail-fast: the first violation aborts the build and
/// no partial SQL text is returned to the caller. Every error carries a
/// structured [`ErrorKind`] plus a human readable message.
pub struct Error {
    kind: ErrorKind,
    message: String,
    cause: Option<anyhow::Error>,
}

/// The category of a statement translation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A column projection was supplied for a document-model request.
    BadProjection,

    /// The request contained no rows.
    MissingRows,

    /// A row's field count does not fit the request shape: the projection
    /// length for a relational insert, exactly one field for a document
    /// insert.
    RowArityMismatch,

    /// Upsert semantics were requested for a relational-model request.
    UpsertNotSupported,

    /// The session configuration query did not return exactly one row.
    ConfigFetchFailed,

    /// A placeholder index lies outside the request's bound argument list.
    InvalidPlaceholder,

    /// The session or driver failed executing a query.
    Driver,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Wraps an opaque session/driver failure.
    pub fn driver(cause: impl Into<anyhow::Error>) -> Self {
        let cause = cause.into();
        Self {
            kind: ErrorKind::Driver,
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}
