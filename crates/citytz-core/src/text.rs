// crates/citytz-core/src/text.rs

//! Text normalization shared by the loader, the matchers and the cache keys.

/// Transliterate Unicode to ASCII (e.g. `Łódź` -> `Lodz`, `Zürich` -> `Zurich`).
///
/// Case is preserved. Used by the loader to derive `city_ascii` for records
/// that do not carry one.
///
/// ```rust
/// use citytz_core::text::ascii_fold;
///
/// assert_eq!(ascii_fold("Düsseldorf"), "Dusseldorf");
/// ```
pub fn ascii_fold(s: &str) -> String {
    deunicode::deunicode(s)
}

/// Case folding used by every case-insensitive comparison.
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Trim, collapse internal whitespace to single spaces and, unless
/// `case_sensitive`, fold case.
///
/// Two queries that normalize to the same string are answered identically,
/// which is what makes the result usable as part of a cache key.
pub fn normalize_query(query: &str, case_sensitive: bool) -> String {
    let joined = query.split_whitespace().collect::<Vec<_>>().join(" ");
    if case_sensitive {
        joined
    } else {
        fold_case(&joined)
    }
}

/// Whitespace tokens of an already normalized query.
#[inline]
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
