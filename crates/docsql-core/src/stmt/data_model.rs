/// How a collection is accessed: as relational rows with named columns, or
/// as whole JSON documents stored under the implicit `doc` column.
///
/// Chosen once per request; projection and upsert legality are a pure
/// function of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataModel {
    Relational,
    Document,
}

impl DataModel {
    pub fn is_relational(self) -> bool {
        matches!(self, DataModel::Relational)
    }
}
