// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_object_names(conn: &Connection, kind: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = ?1 ORDER BY name")
        .unwrap();
    let names = stmt
        .query_map([kind], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();
    names
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = cellphonedb_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    // And: every table and the expanded view exist
    let tables = get_object_names(&conn, "table");
    for expected in ["schema_version", "multidata", "protein", "complex", "interaction"] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
    assert_eq!(get_object_names(&conn, "view"), vec!["multidata_expanded"]);
}

#[test]
fn test_migration_idempotency() {
    // Given: A database with migrations already applied
    let mut conn = setup_test_db();
    cellphonedb_store::migrations::apply_migrations(&mut conn).unwrap();

    // When: Migrations are applied again
    let result = cellphonedb_store::migrations::apply_migrations(&mut conn);

    // Then: Nothing is re-applied
    assert!(result.is_ok());
    let applied = cellphonedb_store::migrations::applied_migrations(&conn).unwrap();
    assert_eq!(
        applied,
        vec!["001_initial_schema", "002_multidata_expanded_view"]
    );
}

#[test]
fn test_migrations_record_checksums() {
    let mut conn = setup_test_db();
    cellphonedb_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksums: Vec<String> = {
        let mut stmt = conn
            .prepare("SELECT checksum FROM schema_version ORDER BY id")
            .unwrap();
        let rows = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap();
        rows
    };

    assert_eq!(checksums.len(), 2);
    assert!(checksums.iter().all(|c| c.len() == 64));
}

#[test]
fn test_migrations_on_file_database() {
    // Given: A database file in a fresh directory
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(".cellphonedb").join("cellphone.db");

    // When: Opened, configured and migrated twice across connections
    {
        let mut conn = cellphonedb_store::db::open(&path).unwrap();
        cellphonedb_store::db::configure(&conn).unwrap();
        cellphonedb_store::migrations::apply_migrations(&mut conn).unwrap();
    }
    let mut conn = cellphonedb_store::db::open(&path).unwrap();
    cellphonedb_store::migrations::apply_migrations(&mut conn).unwrap();

    // Then: The schema is recorded once
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}
