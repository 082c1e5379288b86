use docsql_core::{
    driver::{IdGenerator, IdVariables, Session},
    Error, ErrorKind, Result,
};

/// Query issued once, lazily, before the first id synthesis of a build.
const ID_VARIABLES_QUERY: &str = "SELECT @@mysqlx_document_id_unique_prefix,\
     @@auto_increment_offset,@@auto_increment_increment";

/// Variable names reported when the configuration fetch fails.
const ID_VARIABLE_NAMES: &str = "'mysqlx_document_id_unique_prefix', \
     'auto_increment_offset', 'auto_increment_increment'";

/// Owns document identity for one statement build.
///
/// Detects caller-supplied `_id` members and mints fresh ids for documents
/// lacking one. Configuration is fetched from the session at most once per
/// instance; every minted id is recorded in generation order. An aggregator
/// is tied 1:1 to a single insert request and must not be reused, since the
/// cached configuration reflects session state at fetch time.
pub(super) struct DocIdAggregator<'a> {
    session: &'a mut dyn Session,
    generator: &'a mut dyn IdGenerator,
    variables: Option<IdVariables>,
    generated_ids: Vec<String>,
}

impl<'a> DocIdAggregator<'a> {
    pub(super) fn new(session: &'a mut dyn Session, generator: &'a mut dyn IdGenerator) -> Self {
        Self {
            session,
            generator,
            variables: None,
            generated_ids: Vec::new(),
        }
    }

    /// Mints one id and records it.
    pub(super) fn generate_id(&mut self) -> Result<&str> {
        let vars = match &mut self.variables {
            Some(vars) => vars,
            variables @ None => {
                let rows = self.session.query_system_variables(ID_VARIABLES_QUERY)?;
                let &[[prefix, offset, increment]] = rows.as_slice() else {
                    log::error!(
                        "expected one row of system variables {ID_VARIABLE_NAMES}, got {} rows",
                        rows.len()
                    );
                    return Err(Error::new(
                        ErrorKind::ConfigFetchFailed,
                        format!("error reading system variables {ID_VARIABLE_NAMES}"),
                    ));
                };
                variables.get_or_insert(IdVariables {
                    prefix,
                    offset,
                    increment,
                })
            }
        };

        let id = self.generator.generate(vars);
        self.generated_ids.push(id);
        Ok(self.generated_ids.last().expect("id was just recorded"))
    }

    pub(super) fn into_generated_ids(self) -> Vec<String> {
        self.generated_ids
    }
}

/// Whether JSON text carries a top-level `_id` member. Content that does not
/// parse as a JSON object never does.
pub(super) fn is_id_in_json(text: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::Object(members)) => members.contains_key("_id"),
        _ => false,
    }
}
