pub mod database;
pub mod export;
pub mod plot;
pub mod query;

use rusqlite::Connection;
use std::path::Path;

/// Default database location, relative to the working directory
pub const DEFAULT_DB: &str = ".cellphonedb/cellphone.db";

/// Open an existing database for reading
pub fn open_existing(db: &str) -> Result<Connection, Box<dyn std::error::Error>> {
    if !Path::new(db).exists() {
        return Err(format!(
            "Database not found: {} (run `cellphonedb database init` first)",
            db
        )
        .into());
    }
    Ok(cellphonedb_store::db::open_existing(db)?)
}
