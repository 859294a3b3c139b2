// crates/citytz-core/src/traits.rs
use crate::error::{LoadError, Result};
use crate::model::{CityRecord, SearchOptions};

/// Source of the record set.
///
/// [`crate::loader::Dataset`] calls [`DatasetProvider::load`] at most once and
/// keeps the outcome, so implementations need no caching of their own. A
/// provider must return either the complete dataset or an error.
///
/// Any `Fn() -> Result<Vec<CityRecord>, LoadError>` closure is a provider:
///
/// ```rust
/// use citytz_core::{CitySearch, CityIndex, CityRecord, LoadError};
///
/// let index = CityIndex::new(|| -> Result<Vec<CityRecord>, LoadError> {
///     Ok(vec![CityRecord {
///         city: "Bern".into(),
///         iso2: "CH".into(),
///         iso3: "CHE".into(),
///         ..Default::default()
///     }])
/// });
/// assert_eq!(index.lookup_exact("bern").unwrap().len(), 1);
/// ```
pub trait DatasetProvider: Send + Sync {
    fn load(&self) -> std::result::Result<Vec<CityRecord>, LoadError>;

    /// Human-readable origin, used in log lines.
    fn source(&self) -> String {
        "custom provider".to_string()
    }
}

impl<F> DatasetProvider for F
where
    F: Fn() -> std::result::Result<Vec<CityRecord>, LoadError> + Send + Sync,
{
    fn load(&self) -> std::result::Result<Vec<CityRecord>, LoadError> {
        self()
    }
}

/// The search operations offered by an index.
///
/// Every method validates its input first; rejected input returns
/// [`crate::CityError::Validation`] without touching the dataset or cache.
/// A dataset that failed to load yields [`crate::CityError::Load`]. No match
/// is `Ok` with an empty vector.
pub trait CitySearch {
    /// Records whose city name equals `name`, ignoring case.
    ///
    /// Duplicate city names across provinces and countries are all returned,
    /// in dataset order.
    fn lookup_exact(&self, name: &str) -> Result<Vec<CityRecord>>;

    /// Records where every whitespace token of `query` is a case-insensitive
    /// substring of the city, province/state or country.
    ///
    /// Tokens may be satisfied by different fields, so `"springfield mo"`
    /// finds Springfield, Missouri.
    fn lookup_partial(&self, query: &str) -> Result<Vec<CityRecord>>;

    /// Records whose ISO2 or ISO3 country code equals `code` (case-insensitive).
    fn lookup_by_iso_code(&self, code: &str) -> Result<Vec<CityRecord>>;

    /// Token search driven by [`SearchOptions`].
    fn search(&self, query: &str, options: SearchOptions) -> Result<Vec<CityRecord>>;

    /// The whole dataset, uncached.
    fn all(&self) -> Result<Vec<CityRecord>>;
}
