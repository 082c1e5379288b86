pub mod serializer;
pub use serializer::{SerializedInsert, Serializer};
