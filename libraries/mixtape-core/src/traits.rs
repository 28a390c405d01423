/// Core traits for Mixtape
use crate::engine::{ApplySummary, ChangeEngine};
use crate::error::Result;
use crate::log::LogSink;
use crate::types::{Catalog, ChangeList};

/// Something that accepts a change list
///
/// Keeps the shell independent of the concrete engine. Implementations
/// skip and log invalid requests rather than returning an error; `Err` is
/// reserved for conditions that must abort the whole run.
pub trait Collection {
    /// Apply `changes` in order
    fn apply_changes(&mut self, changes: &ChangeList) -> Result<ApplySummary>;

    /// Current state of the catalog
    fn catalog(&self) -> &Catalog;
}

impl<S: LogSink> Collection for ChangeEngine<S> {
    fn apply_changes(&mut self, changes: &ChangeList) -> Result<ApplySummary> {
        Ok(self.apply(changes))
    }

    fn catalog(&self) -> &Catalog {
        ChangeEngine::catalog(self)
    }
}

/// Build the default collection over `catalog`
pub fn new_collection<S: LogSink>(catalog: Catalog, sink: S) -> ChangeEngine<S> {
    ChangeEngine::new(catalog, sink)
}
