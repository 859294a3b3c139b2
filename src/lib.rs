//! # citytimezones
//!
//! Process-wide convenience API over [`citytz_core`].
//!
//! Every function here delegates to one shared [`CityIndex`] built over the
//! embedded sample dataset on first use. The dataset is parsed once; results are
//! cached in a single LRU of [`DEFAULT_MAX_CACHE_SIZE`] entries shared by all
//! threads.
//!
//! ```rust
//! use citytimezones::{default_search_options, find_from_iso_code, lookup_via_city, search_cities};
//!
//! let chicago = lookup_via_city("Chicago").unwrap();
//! assert_eq!(chicago[0].city, "Chicago");
//!
//! let germany = find_from_iso_code("DE").unwrap();
//! assert!(germany.iter().all(|c| c.iso2 == "DE"));
//!
//! let london = search_cities("london", default_search_options()).unwrap();
//! assert!(!london.is_empty());
//! ```
//!
//! Need a different dataset, a different cache size or an isolated cache?
//! Build your own [`CityIndex`] instead.

use once_cell::sync::Lazy;

pub use citytz_core::{
    CacheStats, CityError, CityIndex, CityRecord, CitySearch, LoadError, Result,
    SearchOptions, ValidationError, DEFAULT_MAX_CACHE_SIZE,
};

/// A city record as returned by every lookup.
pub type CityData = CityRecord;

static GLOBAL: Lazy<CityIndex> = Lazy::new(CityIndex::default);

/// Cities whose name equals `city_name`, ignoring case.
pub fn lookup_via_city(city_name: &str) -> Result<Vec<CityData>> {
    GLOBAL.lookup_exact(city_name)
}

/// Partial match across city, state/province and country, e.g. `"springfield mo"`.
pub fn find_from_city_state_province(search_string: &str) -> Result<Vec<CityData>> {
    GLOBAL.lookup_partial(search_string)
}

/// Cities in the country with the given ISO2 or ISO3 code.
pub fn find_from_iso_code(iso_code: &str) -> Result<Vec<CityData>> {
    GLOBAL.lookup_by_iso_code(iso_code)
}

pub fn search_cities(query: &str, options: SearchOptions) -> Result<Vec<CityData>> {
    GLOBAL.search(query, options)
}

/// Every city in the dataset.
pub fn get_city_mapping() -> Result<Vec<CityData>> {
    GLOBAL.all()
}

/// Case-insensitive substring search.
pub fn default_search_options() -> SearchOptions {
    SearchOptions::default()
}

/// Empties the shared cache. Hit/miss/eviction counters keep counting.
pub fn clear_cache() {
    GLOBAL.clear_cache()
}

pub fn cache_size() -> usize {
    GLOBAL.cache_size()
}

pub fn cache_max_size() -> usize {
    GLOBAL.cache_max_size()
}

pub fn get_cache_stats() -> CacheStats {
    GLOBAL.cache_stats()
}
