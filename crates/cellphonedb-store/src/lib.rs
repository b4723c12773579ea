//! CellPhoneDB Store - SQLite persistence for interactions and multidata
//!
//! Provides:
//! - SQLite schema with an embedded migrations framework
//! - `SqliteSource`, the `TableSource` used by the repositories
//! - Row persistence for loading reference data

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
pub use source::SqliteSource;
