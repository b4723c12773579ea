//! Storage access capability
//!
//! Repositories never talk to a database directly. They receive a
//! `TableSource` and ask it for whole tables filtered by simple integer
//! predicates. `MemorySource` serves tables held in memory; the SQLite
//! implementation lives in the store crate.

use crate::errors::{ExError, ExErrorKind, Result};
use crate::table::Table;
use std::collections::HashMap;
use std::fmt;

/// Logical tables the pipeline reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
    Interaction,
    MultidataExpanded,
}

impl TableName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Interaction => "interaction",
            TableName::MultidataExpanded => "multidata_expanded",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row filter understood by every source
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Every row
    All,
    /// `column = value`
    Eq { column: &'static str, value: i64 },
    /// `columns[0] = value OR columns[1] = value OR ...`
    AnyEq {
        columns: Vec<&'static str>,
        value: i64,
    },
}

/// Read access to tabular storage
pub trait TableSource {
    /// Materialize the rows of `table` matching `predicate`
    ///
    /// An empty match is an empty table with the full header, not an error.
    fn query(&self, table: TableName, predicate: &Predicate) -> Result<Table>;
}

impl<S: TableSource + ?Sized> TableSource for &S {
    fn query(&self, table: TableName, predicate: &Predicate) -> Result<Table> {
        (**self).query(table, predicate)
    }
}

/// Tables held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<TableName, Table>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: TableName, table: Table) -> Self {
        self.tables.insert(name, table);
        self
    }

    pub fn insert(&mut self, name: TableName, table: Table) {
        self.tables.insert(name, table);
    }
}

impl TableSource for MemorySource {
    fn query(&self, table: TableName, predicate: &Predicate) -> Result<Table> {
        let stored = self.tables.get(&table).ok_or_else(|| {
            ExError::new(ExErrorKind::NotFound)
                .with_op("memory_query")
                .with_table(table.as_str())
                .with_message("table not loaded")
        })?;

        let result = match predicate {
            Predicate::All => stored.clone(),
            Predicate::Eq { column, value } => stored.filter_any_eq(&[*column], *value)?,
            Predicate::AnyEq { columns, value } => stored.filter_any_eq(columns, *value)?,
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn source() -> MemorySource {
        let table = Table::with_rows(
            ["a", "b"],
            vec![vec![1.into(), 2.into()], vec![2.into(), 3.into()]],
        )
        .unwrap();
        MemorySource::new().with_table(TableName::Interaction, table)
    }

    #[test]
    fn test_query_all_returns_everything() {
        let rows = source()
            .query(TableName::Interaction, &Predicate::All)
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_query_eq_and_any_eq() {
        let source = source();
        let eq = source
            .query(TableName::Interaction, &Predicate::Eq { column: "a", value: 2 })
            .unwrap();
        assert_eq!(eq.len(), 1);
        assert_eq!(eq.value(0, "b"), Some(&Value::Integer(3)));

        let any = source
            .query(
                TableName::Interaction,
                &Predicate::AnyEq {
                    columns: vec!["a", "b"],
                    value: 2,
                },
            )
            .unwrap();
        assert_eq!(any.len(), 2);
    }

    #[test]
    fn test_missing_table_is_not_found() {
        let err = source()
            .query(TableName::MultidataExpanded, &Predicate::All)
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.table(), Some("multidata_expanded"));
    }

    #[test]
    fn test_unknown_predicate_column_is_reported() {
        let err = source()
            .query(TableName::Interaction, &Predicate::Eq { column: "zz", value: 1 })
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::UnknownColumn);
    }
}
