#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

mod quote;
use quote::Quoted;

// Fragment serializers
mod expr;
mod name;

mod doc_id;
use doc_id::DocIdAggregator;

mod insert;
use insert::InsertStatementBuilder;

use docsql_core::{
    driver::{IdGenerator, Session},
    stmt, Result,
};

/// Serializes protocol statements to MySQL SQL text.
#[derive(Debug, Default)]
pub struct Serializer;

/// Result of serializing an insert request.
#[derive(Debug)]
pub struct SerializedInsert {
    /// The SQL statement text.
    pub sql: String,

    /// Document ids minted during the build, in generation order. Empty for
    /// relational inserts and for documents that carried their own `_id`.
    pub generated_ids: Vec<String>,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// The request's bound argument list, resolved by placeholders
    args: &'a [stmt::Scalar],
}

impl Serializer {
    pub fn new() -> Self {
        Serializer
    }

    /// Serializes one insert request to SQL text.
    ///
    /// The statement builder and its identity aggregator live for exactly
    /// this call and are never shared; `session` is queried at most once,
    /// lazily, for the id-generation variables. On error no partial text is
    /// returned.
    pub fn serialize_insert(
        &self,
        stmt: &stmt::Insert,
        session: &mut dyn Session,
        id_generator: &mut dyn IdGenerator,
    ) -> Result<SerializedInsert> {
        let mut sql = String::new();

        let mut f = Formatter {
            dst: &mut sql,
            args: &stmt.args,
        };

        let mut builder = InsertStatementBuilder::new(DocIdAggregator::new(session, id_generator));
        builder.build(&mut f, stmt)?;

        Ok(SerializedInsert {
            sql,
            generated_ids: builder.into_generated_ids(),
        })
    }
}
