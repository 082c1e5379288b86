use super::{Formatter, ToSql};

use docsql_core::Result;

/// A SQL string literal: single quoted, with quotes, backslashes and NUL
/// bytes escaped.
pub(super) struct Quoted<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Quoted<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push('\'');
        for c in self.0.as_ref().chars() {
            match c {
                '\'' => f.dst.push_str("\\'"),
                '\\' => f.dst.push_str("\\\\"),
                '\0' => f.dst.push_str("\\0"),
                _ => f.dst.push(c),
            }
        }
        f.dst.push('\'');
        Ok(())
    }
}
