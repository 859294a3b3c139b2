// crates/citytz-core/src/search.rs

use crate::cache::{CacheStats, LruCache};
use crate::error::{InputKind, Result};
use crate::loader::{Dataset, EmbeddedDataset};
use crate::model::{CityRecord, IndexConfig, SearchOptions};
use crate::query::{CacheKey, Query};
use crate::traits::{CitySearch, DatasetProvider};
use crate::validate::{normalize_iso_code, validate};
use std::sync::Arc;
use tracing::{debug, trace};

/// Search engine over a lazily loaded dataset, memoizing results in an LRU
/// cache.
///
/// Every call runs: validate input, make sure the dataset is loaded, build
/// the canonical key, consult the cache, and on a miss scan the records and
/// store the result. The scan runs outside the cache lock; only the lookup
/// and the store take it.
///
/// `CityIndex` is `Send + Sync`; share it behind an `Arc` or a `static`.
///
/// ```rust
/// use citytz_core::{CityIndex, CitySearch};
///
/// let index = CityIndex::default();
/// let hits = index.lookup_exact("chicago").unwrap();
/// assert!(hits.iter().all(|c| c.city == "Chicago"));
/// assert_eq!(index.cache_size(), 1);
/// ```
pub struct CityIndex {
    dataset: Dataset,
    cache: LruCache<CacheKey, Arc<[CityRecord]>>,
}

impl CityIndex {
    pub fn new(provider: impl DatasetProvider + 'static) -> Self {
        Self::with_config(provider, IndexConfig::default())
    }

    pub fn with_config(provider: impl DatasetProvider + 'static, config: IndexConfig) -> Self {
        Self {
            dataset: Dataset::new(provider),
            cache: LruCache::new(config.cache_capacity),
        }
    }

    /// Number of records in the dataset, loading it if needed.
    pub fn dataset_len(&self) -> Result<usize> {
        Ok(self.dataset.records()?.len())
    }

    /// Drop all cached results. Statistics are kept.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_max_size(&self) -> usize {
        self.cache.max_size()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn run(&self, query: Query) -> Result<Vec<CityRecord>> {
        let records = self.dataset.records()?;
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let key = query.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            trace!(%key, "cache hit");
            return Ok(hit.to_vec());
        }

        let found: Vec<CityRecord> = records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        debug!(%key, matches = found.len(), scanned = records.len(), "cache miss, scanned dataset");

        self.cache.set(key, Arc::from(found.as_slice()));
        Ok(found)
    }
}

impl Default for CityIndex {
    /// Index over the embedded dataset with the default cache capacity.
    fn default() -> Self {
        Self::new(EmbeddedDataset)
    }
}

impl std::fmt::Debug for CityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CityIndex")
            .field("dataset", &self.dataset)
            .field("cache", &self.cache.stats())
            .finish()
    }
}

impl CitySearch for CityIndex {
    fn lookup_exact(&self, name: &str) -> Result<Vec<CityRecord>> {
        validate(name, InputKind::CityName)?;
        self.run(Query::exact(name))
    }

    fn lookup_partial(&self, query: &str) -> Result<Vec<CityRecord>> {
        validate(query, InputKind::SearchString)?;
        self.run(Query::partial(query))
    }

    fn lookup_by_iso_code(&self, code: &str) -> Result<Vec<CityRecord>> {
        let code = normalize_iso_code(code)?;
        self.run(Query::iso_code(code))
    }

    fn search(&self, query: &str, options: SearchOptions) -> Result<Vec<CityRecord>> {
        validate(query, InputKind::SearchString)?;
        self.run(Query::search(query, options))
    }

    fn all(&self) -> Result<Vec<CityRecord>> {
        Ok(self.dataset.records()?.to_vec())
    }
}
