mod collection;
pub use collection::Collection;

mod data_model;
pub use data_model::DataModel;

mod expr;
pub use expr::Expr;

mod func_call;
pub use func_call::FuncCall;

mod insert;
pub use insert::Insert;

mod object;
pub use object::{Object, ObjectField};

mod row;
pub use row::Row;

mod scalar;
pub use scalar::{ContentType, Scalar};
