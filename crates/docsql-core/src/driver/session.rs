use crate::Result;

/// Read-only access to the active session's configuration.
///
/// Statement building issues at most one system-variable query per build and
/// expects a fixed-shape result: rows of three unsigned 16-bit values.
/// Implementations surface execution failures via [`crate::Error::driver`].
pub trait Session {
    fn query_system_variables(&mut self, stmt: &str) -> Result<Vec<[u16; 3]>>;
}
