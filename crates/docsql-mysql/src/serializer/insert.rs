use super::{
    doc_id::{is_id_in_json, DocIdAggregator},
    Comma, Formatter, Ident, Quoted, ToSql,
};

use docsql_core::{stmt, Error, ErrorKind, Result};

/// Conflict clause for document upserts. Replaces the stored document only
/// when old and new rows agree on `_id`; a mismatch raises the engine's
/// ER_X_BAD_UPSERT_DATA error instead of silently rewriting the identity.
const UPSERT_CLAUSE: &str = " ON DUPLICATE KEY UPDATE \
     doc = IF(JSON_UNQUOTE(JSON_EXTRACT(doc, '$._id')) \
     = JSON_UNQUOTE(JSON_EXTRACT(VALUES(doc), '$._id')), \
     VALUES(doc), MYSQLX_ERROR(5121))";

/// Builds `INSERT INTO ...` statement text for one insert request.
///
/// Validation happens eagerly, in assembly order; the first violation aborts
/// the build. Single-use: one builder per request.
pub(super) struct InsertStatementBuilder<'a> {
    ids: DocIdAggregator<'a>,
}

impl<'a> InsertStatementBuilder<'a> {
    pub(super) fn new(ids: DocIdAggregator<'a>) -> Self {
        Self { ids }
    }

    pub(super) fn build(&mut self, f: &mut Formatter<'_>, stmt: &stmt::Insert) -> Result<()> {
        let collection = &stmt.collection;
        fmt!(f, "INSERT INTO " collection);

        let is_relational = stmt.data_model.is_relational();
        self.projection(f, &stmt.projection, is_relational)?;

        if is_relational {
            self.values(f, &stmt.rows, stmt.projection.len())?;
        } else {
            self.documents(f, &stmt.rows)?;
        }

        if stmt.upsert {
            self.upsert(f, is_relational)?;
        }

        Ok(())
    }

    pub(super) fn into_generated_ids(self) -> Vec<String> {
        self.ids.into_generated_ids()
    }

    fn projection(
        &mut self,
        f: &mut Formatter<'_>,
        projection: &[String],
        is_relational: bool,
    ) -> Result<()> {
        if is_relational {
            if !projection.is_empty() {
                fmt!(f, " (" Comma(projection.iter().map(Ident)) ")");
            }
        } else {
            if !projection.is_empty() {
                return Err(Error::new(
                    ErrorKind::BadProjection,
                    "projection not allowed for a document operation",
                ));
            }
            fmt!(f, " (doc)");
        }
        Ok(())
    }

    fn values(
        &mut self,
        f: &mut Formatter<'_>,
        rows: &[stmt::Row],
        projection_size: usize,
    ) -> Result<()> {
        if rows.is_empty() {
            return Err(missing_rows());
        }

        fmt!(f, " VALUES ");
        let mut s = "";
        for row in rows {
            fmt!(f, s);
            self.row(f, &row.fields, projection_size)?;
            s = ", ";
        }
        Ok(())
    }

    fn row(
        &mut self,
        f: &mut Formatter<'_>,
        fields: &[stmt::Expr],
        projection_size: usize,
    ) -> Result<()> {
        if fields.is_empty() || (projection_size != 0 && fields.len() != projection_size) {
            return Err(row_arity_mismatch());
        }

        fmt!(f, "(" Comma(fields) ")");
        Ok(())
    }

    fn documents(&mut self, f: &mut Formatter<'_>, rows: &[stmt::Row]) -> Result<()> {
        if rows.is_empty() {
            return Err(missing_rows());
        }

        fmt!(f, " VALUES ");
        let mut s = "";
        for row in rows {
            fmt!(f, s);
            self.document(f, &row.fields)?;
            s = ", ";
        }
        Ok(())
    }

    fn document(&mut self, f: &mut Formatter<'_>, fields: &[stmt::Expr]) -> Result<()> {
        let [doc] = fields else {
            return Err(row_arity_mismatch());
        };

        match doc {
            stmt::Expr::Literal(scalar) => {
                if self.document_literal(f, scalar)? {
                    return Ok(());
                }
            }
            stmt::Expr::Placeholder(pos) => {
                if self.document_placeholder(f, *pos)? {
                    return Ok(());
                }
            }
            stmt::Expr::Object(object) => return self.document_object(f, object),
            _ => {}
        }

        // Not document content this builder understands; defer to the
        // generic expression renderer verbatim.
        fmt!(f, "(" doc ")");
        Ok(())
    }

    /// Returns `false` when the literal is not inline document content, in
    /// which case the caller falls back to generic rendering.
    fn document_literal(&mut self, f: &mut Formatter<'_>, scalar: &stmt::Scalar) -> Result<bool> {
        match scalar {
            stmt::Scalar::Octets {
                value,
                content_type,
            } => {
                if !matches!(
                    content_type,
                    stmt::ContentType::Plain | stmt::ContentType::Json
                ) {
                    return Ok(false);
                }
                if is_id_in_json(value) {
                    fmt!(f, "(" Quoted(value) ")");
                } else {
                    fmt!(f, "(JSON_SET(" Quoted(value) ", '$._id', ");
                    let id = self.ids.generate_id()?;
                    fmt!(f, Quoted(id) "))");
                }
                Ok(true)
            }
            stmt::Scalar::String(value) => {
                if is_id_in_json(value) {
                    fmt!(f, "(" scalar ")");
                } else {
                    fmt!(f, "(JSON_SET(" Quoted(value) ", '$._id', ");
                    let id = self.ids.generate_id()?;
                    fmt!(f, Quoted(id) "))");
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// A placeholder resolving to a literal takes the literal path; an
    /// unresolvable index is left to the generic renderer, bypassing id
    /// synthesis.
    fn document_placeholder(&mut self, f: &mut Formatter<'_>, pos: u32) -> Result<bool> {
        let args = f.args;
        match args.get(pos as usize) {
            Some(arg) => self.document_literal(f, arg),
            None => Ok(false),
        }
    }

    fn document_object(&mut self, f: &mut Formatter<'_>, object: &stmt::Object) -> Result<()> {
        if is_id_in_object(object) {
            fmt!(f, "(" object ")");
        } else {
            fmt!(f, "(JSON_SET(" object ", '$._id', ");
            let id = self.ids.generate_id()?;
            fmt!(f, Quoted(id) "))");
        }
        Ok(())
    }

    fn upsert(&mut self, f: &mut Formatter<'_>, is_relational: bool) -> Result<()> {
        if is_relational {
            return Err(Error::new(
                ErrorKind::UpsertNotSupported,
                "cannot upsert a TABLE-model collection",
            ));
        }

        fmt!(f, UPSERT_CLAUSE);
        Ok(())
    }
}

fn is_id_in_object(object: &stmt::Object) -> bool {
    object.fields.iter().any(|field| field.key == "_id")
}

fn missing_rows() -> Error {
    Error::new(ErrorKind::MissingRows, "missing row data for insert")
}

fn row_arity_mismatch() -> Error {
    Error::new(
        ErrorKind::RowArityMismatch,
        "wrong number of fields in row being inserted",
    )
}
