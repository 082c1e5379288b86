use super::{Formatter, Ident, Period, ToSql};

use docsql_core::{stmt, Result};

impl ToSql for &stmt::Collection {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let parts = Period(
            self.schema
                .as_deref()
                .into_iter()
                .chain([self.name.as_str()])
                .map(Ident),
        );
        fmt!(f, parts);
        Ok(())
    }
}
