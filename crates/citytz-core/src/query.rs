// crates/citytz-core/src/query.rs

//! Normalized queries, their cache keys and their match predicates.
//!
//! A [`Query`] is built from raw (already validated) input once; the same
//! normalized text then drives both the cache key and the record predicate,
//! so two inputs that share a key always produce the same result.

use crate::model::{CityRecord, SearchOptions};
use crate::text::{fold_case, normalize_query, tokens};
use std::fmt;

/// Which predicate a query applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Exact,
    Partial,
    IsoCode,
    Search,
}

impl Strategy {
    pub const fn tag(self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Partial => "partial",
            Strategy::IsoCode => "iso",
            Strategy::Search => "search",
        }
    }
}

/// Canonical cache key: `<strategy>:<options>:<normalized text>`.
///
/// Options are encoded as two flags, `c`/`i` for case-sensitive/insensitive
/// and `e`/`s` for exact/substring, e.g. `partial:is:springfield mo`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    strategy: Strategy,
    text: String,
    options: SearchOptions,
}

impl Query {
    pub fn exact(name: &str) -> Self {
        Self {
            strategy: Strategy::Exact,
            text: normalize_query(name, false),
            options: SearchOptions::default().exact_match(true),
        }
    }

    pub fn partial(query: &str) -> Self {
        Self {
            strategy: Strategy::Partial,
            text: normalize_query(query, false),
            options: SearchOptions::default(),
        }
    }

    /// `code` must already be validated and uppercased.
    pub fn iso_code(code: String) -> Self {
        Self {
            strategy: Strategy::IsoCode,
            text: code,
            options: SearchOptions::default().case_sensitive(true).exact_match(true),
        }
    }

    pub fn search(query: &str, options: SearchOptions) -> Self {
        Self {
            strategy: Strategy::Search,
            text: normalize_query(query, options.case_sensitive),
            options,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Normalized text; what the predicate and the key see.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cache_key(&self) -> CacheKey {
        let case = if self.options.case_sensitive { 'c' } else { 'i' };
        let mode = if self.options.exact_match { 'e' } else { 's' };
        CacheKey(format!(
            "{}:{case}{mode}:{}",
            self.strategy.tag(),
            self.text
        ))
    }

    pub fn matches(&self, record: &CityRecord) -> bool {
        match self.strategy {
            Strategy::Exact => fold_case(&record.city) == self.text,
            Strategy::IsoCode => record.has_iso_code(&self.text),
            Strategy::Partial | Strategy::Search => self.matches_tokens(record),
        }
    }

    /// Every token must be satisfied by at least one searchable field.
    fn matches_tokens(&self, record: &CityRecord) -> bool {
        let fields = record.searchable_fields().map(|field| {
            if self.options.case_sensitive {
                field.to_string()
            } else {
                fold_case(field)
            }
        });

        tokens(&self.text).all(|token| {
            fields.iter().any(|field| {
                if self.options.exact_match {
                    field == token
                } else {
                    field.contains(token)
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn springfield_mo() -> CityRecord {
        CityRecord {
            city: "Springfield".into(),
            city_ascii: "Springfield".into(),
            country: "United States of America".into(),
            iso2: "US".into(),
            iso3: "USA".into(),
            province: "Missouri".into(),
            state_ansi: "MO".into(),
            timezone: "America/Chicago".into(),
            ..Default::default()
        }
    }

    #[test]
    fn equivalent_inputs_share_a_key() {
        assert_eq!(Query::exact("Chicago").cache_key(), Query::exact("  chicago ").cache_key());
        assert_eq!(
            Query::partial("Springfield   MO").cache_key(),
            Query::partial("springfield mo").cache_key()
        );
        assert_eq!(
            Query::search("London", SearchOptions::default()).cache_key(),
            Query::search("london", SearchOptions::default()).cache_key()
        );
    }

    #[test]
    fn keys_differ_across_strategies_and_options() {
        let partial = Query::partial("paris").cache_key();
        let exact = Query::exact("paris").cache_key();
        let search = Query::search("paris", SearchOptions::default()).cache_key();
        assert_ne!(partial, exact);
        assert_ne!(partial, search);

        let sensitive = SearchOptions::default().case_sensitive(true);
        assert_ne!(
            Query::search("Paris", sensitive).cache_key(),
            Query::search("Paris", SearchOptions::default()).cache_key()
        );
        assert_ne!(
            Query::search("Paris", sensitive).cache_key(),
            Query::search("paris", sensitive).cache_key()
        );
        assert_eq!(Query::exact("Chicago").cache_key().as_str(), "exact:ie:chicago");
    }

    #[test]
    fn exact_compares_whole_city_name() {
        let record = springfield_mo();
        assert!(Query::exact("SPRINGFIELD").matches(&record));
        assert!(!Query::exact("Springfiel").matches(&record));
        assert!(!Query::exact("Springfield MO").matches(&record));
    }

    #[test]
    fn tokens_may_hit_different_fields() {
        let record = springfield_mo();
        assert!(Query::partial("springfield mo").matches(&record));
        assert!(Query::partial("spring missouri united").matches(&record));
        assert!(!Query::partial("springfield illinois").matches(&record));
    }

    #[test]
    fn case_sensitive_search_does_not_fold() {
        let record = springfield_mo();
        let sensitive = SearchOptions::default().case_sensitive(true);
        assert!(Query::search("Spring MO", sensitive).matches(&record));
        assert!(!Query::search("spring", sensitive).matches(&record));
    }

    #[test]
    fn exact_search_requires_whole_fields() {
        let record = springfield_mo();
        let exact = SearchOptions::default().exact_match(true);
        assert!(Query::search("springfield mo", exact).matches(&record));
        assert!(!Query::search("spring", exact).matches(&record));

        let strict = exact.case_sensitive(true);
        assert!(Query::search("Springfield MO", strict).matches(&record));
        assert!(!Query::search("springfield MO", strict).matches(&record));
    }

    #[test]
    fn exact_search_compares_tokens_not_whole_phrases() {
        let record = CityRecord {
            city: "New York".into(),
            province: "New York".into(),
            state_ansi: "NY".into(),
            ..Default::default()
        };
        let exact = SearchOptions::default().exact_match(true);
        assert!(!Query::search("New York", exact).matches(&record));
        assert!(Query::exact("New York").matches(&record));
        assert!(Query::search("ny", exact).matches(&record));
    }

    #[test]
    fn iso_matches_either_code() {
        let record = springfield_mo();
        assert!(Query::iso_code("US".into()).matches(&record));
        assert!(Query::iso_code("USA".into()).matches(&record));
        assert!(!Query::iso_code("DE".into()).matches(&record));
    }
}
