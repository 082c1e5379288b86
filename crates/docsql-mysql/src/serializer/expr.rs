use super::{Comma, Formatter, Quoted, ToSql};

use docsql_core::{stmt, Error, ErrorKind, Result};

use std::fmt::Write;

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            Literal(scalar) => scalar.to_sql(f),
            Placeholder(pos) => {
                let args = f.args;
                match args.get(*pos as usize) {
                    Some(arg) => arg.to_sql(f),
                    None => Err(Error::new(
                        ErrorKind::InvalidPlaceholder,
                        format!("placeholder {pos} is outside the argument list"),
                    )),
                }
            }
            Object(object) => object.to_sql(f),
            Array(items) => {
                fmt!(f, "JSON_ARRAY(" Comma(items) ")");
                Ok(())
            }
            FuncCall(call) => {
                // Function names come from the protocol's fixed vocabulary
                // and are emitted verbatim, never identifier-quoted.
                fmt!(f, call.name.as_str() "(" Comma(&call.args) ")");
                Ok(())
            }
        }
    }
}

impl ToSql for &stmt::Scalar {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Scalar::*;

        match self {
            Null => fmt!(f, "NULL"),
            Bool(true) => fmt!(f, "TRUE"),
            Bool(false) => fmt!(f, "FALSE"),
            Int(value) => write!(f.dst, "{value}").unwrap(),
            Uint(value) => write!(f.dst, "{value}").unwrap(),
            Double(value) => write!(f.dst, "{value}").unwrap(),
            Octets {
                value,
                content_type: stmt::ContentType::Json,
            } => fmt!(f, "CAST(" Quoted(value) " AS JSON)"),
            Octets { value, .. } => fmt!(f, Quoted(value)),
            String(value) => fmt!(f, Quoted(value)),
        }
        Ok(())
    }
}

impl ToSql for &stmt::Object {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let members = Comma(
            self.fields
                .iter()
                .map(|field| (Quoted(&field.key), ", ", &field.value)),
        );
        fmt!(f, "JSON_OBJECT(" members ")");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsql_core::stmt::{Expr, FuncCall, Object, Scalar};

    fn render(expr: &Expr, args: &[Scalar]) -> Result<String> {
        let mut sql = String::new();
        let mut f = Formatter {
            dst: &mut sql,
            args,
        };
        expr.to_sql(&mut f)?;
        Ok(sql)
    }

    #[test]
    fn scalar_literals() {
        assert_eq!(render(&Expr::Literal(Scalar::Null), &[]).unwrap(), "NULL");
        assert_eq!(render(&Expr::from(42), &[]).unwrap(), "42");
        assert_eq!(render(&Expr::from("two"), &[]).unwrap(), "'two'");
        assert_eq!(
            render(&Expr::Literal(Scalar::Bool(true)), &[]).unwrap(),
            "TRUE"
        );
    }

    #[test]
    fn json_octets_cast() {
        let expr = Expr::Literal(Scalar::json(r#"{"a": 1}"#));
        assert_eq!(
            render(&expr, &[]).unwrap(),
            r#"CAST('{"a": 1}' AS JSON)"#
        );
    }

    #[test]
    fn string_escaping() {
        let expr = Expr::from(r"it's a \ path");
        assert_eq!(render(&expr, &[]).unwrap(), r"'it\'s a \\ path'");
    }

    #[test]
    fn placeholder_resolves_inline() {
        let args = vec![Scalar::Int(7)];
        assert_eq!(render(&Expr::Placeholder(0), &args).unwrap(), "7");
    }

    #[test]
    fn placeholder_out_of_range() {
        let err = render(&Expr::Placeholder(3), &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPlaceholder);
    }

    #[test]
    fn object_and_array_constructors() {
        let expr = Expr::Object(Object::new(vec![
            Object::field("a", 1i64),
            Object::field("b", Expr::Array(vec![Expr::from(2), Expr::from("x")])),
        ]));
        assert_eq!(
            render(&expr, &[]).unwrap(),
            "JSON_OBJECT('a', 1, 'b', JSON_ARRAY(2, 'x'))"
        );
    }

    #[test]
    fn func_call() {
        let expr = Expr::FuncCall(FuncCall::new(
            "JSON_MERGE_PATCH",
            vec![Expr::from("{}"), Expr::from("{\"a\": 1}")],
        ));
        assert_eq!(
            render(&expr, &[]).unwrap(),
            "JSON_MERGE_PATCH('{}', '{\"a\": 1}')"
        );
    }
}
