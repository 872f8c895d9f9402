//! Reference loading: CSV parsing and the startup fetch.

mod csv;
mod loader;
mod types;

pub use csv::parse_references;
pub use loader::load;
pub use types::{ColumnNames, Reference};
