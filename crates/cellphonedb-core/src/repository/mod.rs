//! Repositories over an injected `TableSource`
//!
//! ## Logging Ownership
//!
//! Public repository operations own lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success, with the returned row count
//! - `log_op_error!` on failure
//!
//! Storage failures are passed through untouched.

pub mod interaction_repository;
pub mod multidata_repository;
pub mod registry;

pub use interaction_repository::InteractionRepository;
pub use multidata_repository::MultidataRepository;
pub use registry::RepositoryRegistry;

use crate::errors::Result;
use crate::table::Table;
use crate::{log_op_end, log_op_error};
use std::time::Instant;

/// Emit the closing boundary event for `op` and hand the result back
pub(crate) fn finish_op(op: &'static str, start: Instant, result: Result<Table>) -> Result<Table> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(table) => {
            log_op_end!(op, duration_ms = duration_ms, row_count = table.len());
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}
