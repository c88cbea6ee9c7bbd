//! Shareable entry point for presentation layers.
//!
//! A [`Reader`] owns the corpus through an `Arc`, so it can be cloned into any
//! number of threads or request handlers. Every call is a pure read of the
//! immutable index: no locking, no ordering between concurrent calls.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::assembly::{assemble, Assembly};
use crate::corpus::CorpusIndex;
use crate::error::Result;
use crate::locator::{resolve, Locator, Query};

#[derive(Debug, Clone)]
pub struct Reader {
    index: Arc<CorpusIndex>,
}

impl Reader {
    pub fn new(index: CorpusIndex) -> Self {
        Self { index: Arc::new(index) }
    }

    pub fn from_shared(index: Arc<CorpusIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn resolve(&self, query: &Query) -> Result<Locator> {
        resolve(&self.index, query)
    }

    pub fn assemble(&self, locator: &Locator) -> Result<Assembly<'_>> {
        assemble(&self.index, locator)
    }

    /// Resolves and assembles in one step. Failures are logged with their kind
    /// and handed back unchanged.
    pub fn lookup(&self, query: &Query) -> Result<Assembly<'_>> {
        let result = self.resolve(query).and_then(|locator| self.assemble(&locator));
        match &result {
            Ok(assembly) => debug!(
                kind = %query.kind(),
                raw = query.raw_text(),
                elements = assembly.len(),
                "lookup complete"
            ),
            Err(e) => warn!(
                kind = %query.kind(),
                raw = query.raw_text(),
                error = ?e.kind(),
                "lookup failed"
            ),
        }
        result
    }
}
