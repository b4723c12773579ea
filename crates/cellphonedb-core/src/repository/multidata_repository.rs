use super::finish_op;
use crate::errors::Result;
use crate::log_op_start;
use crate::source::{Predicate, TableName, TableSource};
use crate::table::Table;

/// Read access to the expanded multidata reference table
pub struct MultidataRepository<'a, S: TableSource> {
    source: &'a S,
}

impl<'a, S: TableSource> MultidataRepository<'a, S> {
    pub const NAME: &'static str = "multidata";

    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Every multidata entity with its display name and entry name
    pub fn get_all_expanded(&self) -> Result<Table> {
        log_op_start!("multidata_get_all_expanded");
        let start = std::time::Instant::now();

        let result = self
            .source
            .query(TableName::MultidataExpanded, &Predicate::All);

        finish_op("multidata_get_all_expanded", start, result)
    }
}
