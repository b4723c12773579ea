//! Repository layer for writing reference data to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::{ReferenceData, SqliteRepo};
