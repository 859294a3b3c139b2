// crates/citytz-core/src/model.rs

use serde::{Deserialize, Serialize};

/// A single city with its timezone and location.
///
/// Records are built once by the loader and never mutated afterwards.
/// Search results hand out clones, so callers own what they receive.
///
/// The serde shape mirrors the source dataset:
/// ```json
/// {
///   "city": "Chicago", "city_ascii": "Chicago",
///   "lat": 41.82, "lng": -87.75, "pop": 5915976,
///   "country": "United States of America", "iso2": "US", "iso3": "USA",
///   "province": "Illinois", "state_ansi": "IL",
///   "timezone": "America/Chicago"
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    /// ASCII transliteration of `city`; filled in by the loader when missing.
    #[serde(default)]
    pub city_ascii: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub pop: f64,
    pub country: String,
    pub iso2: String,
    pub iso3: String,
    #[serde(default)]
    pub province: String,
    /// Short state code, e.g. "MO". Empty outside the US/CA/AU.
    #[serde(default)]
    pub state_ansi: String,
    pub timezone: String,
}

impl CityRecord {
    /// Fields that free-text and token searches look at, in match order.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.city,
            &self.city_ascii,
            &self.province,
            &self.state_ansi,
            &self.country,
        ]
    }

    pub fn has_iso_code(&self, code: &str) -> bool {
        self.iso2 == code || self.iso3 == code
    }
}

/// Knobs for [`crate::CityIndex::search`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Compare without case folding.
    pub case_sensitive: bool,
    /// Require whole-field equality instead of substring containment.
    ///
    /// Matching is still per whitespace token: each token must equal some
    /// whole field. A multi-word name therefore never matches its own city
    /// field; use [`crate::CitySearch::lookup_exact`] for that.
    ///
    /// ```rust
    /// use citytz_core::{CityIndex, CitySearch, SearchOptions};
    ///
    /// let index = CityIndex::default();
    /// let exact = SearchOptions::default().exact_match(true);
    ///
    /// // "new" and "york" are not whole fields of any record.
    /// assert!(index.search("New York", exact).unwrap().is_empty());
    /// assert_eq!(index.lookup_exact("New York").unwrap().len(), 1);
    ///
    /// // Single-word tokens may each hit a different field.
    /// assert!(!index.search("chicago il", exact).unwrap().is_empty());
    /// ```
    pub exact_match: bool,
}

impl SearchOptions {
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn exact_match(mut self, yes: bool) -> Self {
        self.exact_match = yes;
        self
    }
}

/// Configuration for building a [`crate::CityIndex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Maximum number of cached query results. Zero selects the default.
    pub cache_capacity: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            cache_capacity: crate::cache::DEFAULT_MAX_CACHE_SIZE,
        }
    }
}
