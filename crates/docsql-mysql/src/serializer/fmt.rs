use super::Formatter;

use docsql_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl<A, B, C> ToSql for (A, B, C)
where
    A: ToSql,
    B: ToSql,
    C: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, self.0 self.1 self.2);
        Ok(())
    }
}
