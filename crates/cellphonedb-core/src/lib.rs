//! CellPhoneDB Core - interaction expansion and export
//!
//! This crate provides:
//! - `Table`, the in-memory tabular shape shared by every stage
//! - the `TableSource` storage capability and an in-memory implementation
//! - interaction and multidata repositories, with bilateral expansion
//! - the interaction exporter producing the presentation table
//! - delimited text reading and writing
//! - the canonical error and logging facilities

pub mod delimited;
pub mod errors;
pub mod expansion;
pub mod exporters;
pub mod logging_facility;
pub mod model;
pub mod repository;
pub mod source;
pub mod table;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, TableError};
pub use exporters::interaction_exporter;
pub use model::{Interaction, IntoMultidataId, MultidataId};
pub use repository::{InteractionRepository, MultidataRepository, RepositoryRegistry};
pub use source::{MemorySource, Predicate, TableName, TableSource};
pub use table::{Table, Value};
