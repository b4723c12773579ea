use super::{InteractionRepository, MultidataRepository};
use crate::source::TableSource;

/// Owns the storage capability and hands out repositories borrowing it
///
/// Calls are sequential; the source is never shared across threads here.
pub struct RepositoryRegistry<S: TableSource> {
    source: S,
}

impl<S: TableSource> RepositoryRegistry<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn interactions(&self) -> InteractionRepository<'_, S> {
        InteractionRepository::new(&self.source)
    }

    pub fn multidatas(&self) -> MultidataRepository<'_, S> {
        MultidataRepository::new(&self.source)
    }
}
