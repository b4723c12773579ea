use super::{finish_op, MultidataRepository};
use crate::errors::{ExError, Result};
use crate::expansion::expand_interactions_multidatas;
use crate::log_op_start;
use crate::model::interaction::PARTICIPANT_COLUMNS;
use crate::model::{IntoMultidataId, MultidataId};
use crate::source::{Predicate, TableName, TableSource};
use crate::table::Table;
use std::time::Instant;

/// Interaction queries and their expansion against multidata
pub struct InteractionRepository<'a, S: TableSource> {
    source: &'a S,
}

impl<'a, S: TableSource> InteractionRepository<'a, S> {
    pub const NAME: &'static str = "interaction";

    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Every interaction row, unfiltered
    pub fn get_all(&self) -> Result<Table> {
        log_op_start!("interaction_get_all");
        let start = Instant::now();

        let result = self.source.query(TableName::Interaction, &Predicate::All);

        finish_op("interaction_get_all", start, result)
    }

    /// Interactions in which `id` is either participant
    ///
    /// No match yields an empty table, not an error. An id that does not
    /// convert fails with `ERR_INVALID_INPUT`.
    pub fn get_interactions_by_multidata_id(&self, id: impl IntoMultidataId) -> Result<Table> {
        let id = start_with_id("interaction_get_by_multidata_id", id);
        let start = Instant::now();

        let result = id.and_then(|id| self.fetch_by_multidata_id(id));

        finish_op("interaction_get_by_multidata_id", start, result)
    }

    /// Interactions in which `id` is either participant, expanded with
    /// both participants' multidata annotation
    pub fn get_interactions_multidata_by_multidata_id(
        &self,
        id: impl IntoMultidataId,
    ) -> Result<Table> {
        let id = start_with_id("interaction_get_multidata_by_multidata_id", id);
        let start = Instant::now();

        let result = id.and_then(|id| self.fetch_by_multidata_id(id)).and_then(|interactions| {
            let multidatas = MultidataRepository::new(self.source).get_all_expanded()?;
            expand_interactions_multidatas(&interactions, &multidatas)
        });

        finish_op("interaction_get_multidata_by_multidata_id", start, result)
    }

    /// Every interaction, expanded with both participants' annotation
    pub fn get_all_expanded(&self) -> Result<Table> {
        log_op_start!("interaction_get_all_expanded");
        let start = Instant::now();

        let result = self
            .source
            .query(TableName::Interaction, &Predicate::All)
            .and_then(|interactions| {
                let multidatas = MultidataRepository::new(self.source).get_all_expanded()?;
                expand_interactions_multidatas(&interactions, &multidatas)
            });

        finish_op("interaction_get_all_expanded", start, result)
    }

    fn fetch_by_multidata_id(&self, id: MultidataId) -> Result<Table> {
        self.source.query(
            TableName::Interaction,
            &Predicate::AnyEq {
                columns: PARTICIPANT_COLUMNS.to_vec(),
                value: id.get(),
            },
        )
    }
}

/// Convert `id` and emit the start event for `op`
///
/// A failed conversion still opens the operation, so the caller's
/// `finish_op` closes it with the error.
fn start_with_id(op: &'static str, id: impl IntoMultidataId) -> Result<MultidataId> {
    match id.into_multidata_id() {
        Ok(id) => {
            log_op_start!(op, multidata_id = id.get());
            Ok(id)
        }
        Err(e) => {
            log_op_start!(op);
            Err(ExError::from(e).with_op(op))
        }
    }
}
