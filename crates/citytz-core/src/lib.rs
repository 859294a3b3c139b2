// crates/citytz-core/src/lib.rs

//! # citytz-core
//!
//! Answers "which city/timezone records match this query?" against an
//! in-memory dataset, with four strategies behind a shared LRU result cache:
//!
//! - [`CitySearch::lookup_exact`]: city name equality, case-insensitive
//! - [`CitySearch::lookup_partial`]: every token found in city, province or country
//! - [`CitySearch::lookup_by_iso_code`]: ISO2 / ISO3 country code
//! - [`CitySearch::search`]: token search tuned by [`SearchOptions`]
//!
//! Input passes through [`validate`] first. Rejected input, an unavailable
//! dataset and "no match" are three distinct outcomes: a
//! [`CityError::Validation`], a [`CityError::Load`] and `Ok(vec![])`.
//!
//! ```rust
//! use citytz_core::{CityIndex, CitySearch, SearchOptions};
//!
//! let index = CityIndex::default();
//!
//! let chicago = index.lookup_exact("Chicago").unwrap();
//! assert_eq!(chicago[0].timezone, "America/Chicago");
//!
//! let missouri = index.lookup_partial("springfield mo").unwrap();
//! assert!(missouri.iter().any(|c| c.state_ansi == "MO"));
//!
//! assert!(index.lookup_by_iso_code("INVALID").unwrap_err().is_validation());
//! assert!(index.search("paris", SearchOptions::default()).unwrap().len() >= 2);
//! ```

pub mod cache;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod search;
pub mod text;
pub mod traits;
pub mod validate;

// Re-exports
pub use crate::cache::{CacheStats, LruCache, DEFAULT_MAX_CACHE_SIZE};
pub use crate::error::{
    CityError, InputKind, LoadError, Result, ValidationError, ValidationReason,
};
pub use crate::loader::{Dataset, EmbeddedDataset, FileDataset, StaticDataset};
pub use crate::model::{CityRecord, IndexConfig, SearchOptions};
pub use crate::search::CityIndex;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{CitySearch, DatasetProvider};
