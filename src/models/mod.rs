pub mod collection;
pub mod postman;
pub mod variables;

pub use collection::{Body, Collection, Transaction};
pub use variables::{DataSource, VariableMap, VariableOrigin, VariableSources};
