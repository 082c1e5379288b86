mod id_generator;
pub use id_generator::{IdGenerator, IdVariables, SerialIdGenerator};

mod session;
pub use session::Session;
