use super::{Formatter, ToSql};

use docsql_core::Result;

/// An identifier, backtick quoted on output with embedded backticks doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push('`');
        for c in self.0.as_ref().chars() {
            if c == '`' {
                f.dst.push('`');
            }
            f.dst.push(c);
        }
        f.dst.push('`');
        Ok(())
    }
}
