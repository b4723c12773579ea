//! SQLite-backed `TableSource`
//!
//! Each query is a plain `SELECT *` over one table or view, materialized
//! into a `Table` with the statement's column names as header.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use cellphonedb_core::errors::ExError;
use cellphonedb_core::model::{interaction, multidata};
use cellphonedb_core::{Predicate, Table, TableName, TableSource, Value};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

/// Reads tables through a borrowed connection
pub struct SqliteSource<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteSource<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &'c Connection {
        self.conn
    }
}

/// Column giving the stable row order of each logical table
fn order_column(table: TableName) -> &'static str {
    match table {
        TableName::Interaction => interaction::ID_INTERACTION,
        TableName::MultidataExpanded => multidata::ID_MULTIDATA,
    }
}

/// Build the SELECT for `table` and the parameters it binds
fn build_query(table: TableName, predicate: &Predicate) -> (String, Vec<i64>) {
    let (clause, params) = match predicate {
        Predicate::All => (String::new(), Vec::new()),
        Predicate::Eq { column, value } => (format!(" WHERE \"{}\" = ?1", column), vec![*value]),
        Predicate::AnyEq { columns, value } => {
            if columns.is_empty() {
                (" WHERE 0".to_string(), Vec::new())
            } else {
                let ors: Vec<String> = columns
                    .iter()
                    .map(|column| format!("\"{}\" = ?1", column))
                    .collect();
                (format!(" WHERE {}", ors.join(" OR ")), vec![*value])
            }
        }
    };

    let sql = format!(
        "SELECT * FROM {}{} ORDER BY \"{}\"",
        table.as_str(),
        clause,
        order_column(table)
    );
    (sql, params)
}

fn to_value(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Text(hex::encode(bytes)),
    }
}

impl TableSource for SqliteSource<'_> {
    fn query(&self, table: TableName, predicate: &Predicate) -> Result<Table> {
        let (sql, params) = build_query(table, predicate);

        let with_table = |e: rusqlite::Error| -> ExError { from_rusqlite(e).with_table(table.as_str()) };

        let mut stmt = self.conn.prepare(&sql).map_err(with_table)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(with_table)?;
        while let Some(row) = cursor.next().map_err(with_table)? {
            let mut cells = Vec::with_capacity(width);
            for i in 0..width {
                cells.push(to_value(row.get_ref(i).map_err(with_table)?));
            }
            rows.push(cells);
        }

        tracing::debug!(table = table.as_str(), row_count = rows.len(), "sqlite query");

        Ok(Table::with_rows(columns, rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_any_eq() {
        let (sql, params) = build_query(
            TableName::Interaction,
            &Predicate::AnyEq {
                columns: vec!["multidata_1_id", "multidata_2_id"],
                value: 7,
            },
        );
        assert_eq!(
            sql,
            "SELECT * FROM interaction WHERE \"multidata_1_id\" = ?1 OR \"multidata_2_id\" = ?1 ORDER BY \"id_interaction\""
        );
        assert_eq!(params, vec![7]);
    }

    #[test]
    fn test_build_query_all() {
        let (sql, params) = build_query(TableName::MultidataExpanded, &Predicate::All);
        assert_eq!(sql, "SELECT * FROM multidata_expanded ORDER BY \"id_multidata\"");
        assert!(params.is_empty());
    }

    #[test]
    fn test_missing_table_is_persistence_error() {
        let conn = Connection::open_in_memory().unwrap();
        let source = SqliteSource::new(&conn);

        let err = source
            .query(TableName::Interaction, &Predicate::All)
            .unwrap_err();

        assert_eq!(err.code(), "ERR_PERSISTENCE");
        assert_eq!(err.op(), Some("sqlite"));
        assert_eq!(err.table(), Some("interaction"));
    }
}
