//! Entity cache: the last fetched snapshot of the dataset collection.
//!
//! Every other component resolves a dataset id to its columns through this
//! cache. It is written only by the refresh step of the orchestrator and
//! always replaced as a whole.

use common::model::dataset::{Dataset, DatasetId};

#[derive(Debug, Clone, Default)]
pub struct EntityCache {
    datasets: Vec<Dataset>,
    loaded: bool,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cache already holding `datasets`.
    pub fn with_datasets(datasets: Vec<Dataset>) -> Self {
        let mut cache = Self::new();
        cache.replace(datasets);
        cache
    }

    /// Atomically swaps in a freshly fetched collection.
    pub fn replace(&mut self, datasets: Vec<Dataset>) {
        self.datasets = datasets;
        self.loaded = true;
    }

    pub fn resolve(&self, id: DatasetId) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Resolves the raw value of a dataset `<select>`. Empty or malformed
    /// values resolve to nothing.
    pub fn resolve_raw(&self, raw: &str) -> Option<&Dataset> {
        raw.parse::<DatasetId>().ok().and_then(|id| self.resolve(id))
    }

    pub fn count(&self) -> usize {
        self.datasets.len()
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// `false` until the first successful refresh.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
