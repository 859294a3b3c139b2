// crates/citytz-core/src/validate.rs

//! Input gate in front of the search engine.
//!
//! This is a conservative denylist, not a sanitizer: it fails closed on input
//! that is obviously hostile (markup, script URLs, control bytes) or oversized.
//! Accepted input is passed on unchanged; nothing here escapes or rewrites it.
//! Validation never looks at the dataset or the cache.

use crate::error::{InputKind, ValidationError, ValidationReason};
use once_cell::sync::Lazy;
use regex::Regex;

static FORBIDDEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(<\s*/?\s*script|/\s*script\s*>|javascript\s*:|vbscript\s*:|data\s*:\s*text/html|\bon[a-z]+\s*=|&#x?[0-9a-f]+;)",
    )
    .expect("FORBIDDEN_PATTERN is a valid regex")
});

/// Control (`Cc`, tab and newline included) and format (`Cf`, e.g. bidi
/// overrides and zero-width joiners) characters.
static INVISIBLE_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Cc}\p{Cf}]").expect("INVISIBLE_CHAR is a valid regex"));

/// Validate `input` for the given `kind`.
///
/// An empty string is accepted for [`InputKind::CityName`] and
/// [`InputKind::SearchString`]; it is not a valid ISO code.
pub fn validate(input: &str, kind: InputKind) -> Result<(), ValidationError> {
    match kind {
        InputKind::IsoCode => normalize_iso_code(input).map(|_| ()),
        InputKind::CityName | InputKind::SearchString => validate_text(input, kind),
    }
}

/// Validate an ISO2/ISO3 code and return it trimmed and uppercased.
///
/// ```rust
/// use citytz_core::validate::normalize_iso_code;
///
/// assert_eq!(normalize_iso_code(" de ").unwrap(), "DE");
/// assert!(normalize_iso_code("INVALID").is_err());
/// ```
pub fn normalize_iso_code(input: &str) -> Result<String, ValidationError> {
    let code = input.trim();
    let len = code.chars().count();
    let well_formed = (2..=InputKind::IsoCode.max_len()).contains(&len)
        && code.chars().all(|c| c.is_ascii_alphabetic());

    if !well_formed {
        return Err(ValidationError::new(
            InputKind::IsoCode,
            ValidationReason::InvalidIsoCode,
        ));
    }
    Ok(code.to_ascii_uppercase())
}

fn validate_text(input: &str, kind: InputKind) -> Result<(), ValidationError> {
    let len = input.chars().count();
    let max = kind.max_len();
    if len > max {
        return Err(ValidationError::new(
            kind,
            ValidationReason::TooLong { len, max },
        ));
    }

    if INVISIBLE_CHAR.is_match(input) {
        return Err(ValidationError::new(
            kind,
            ValidationReason::ControlCharacter,
        ));
    }

    if let Some(c) = input.chars().find(|c| matches!(c, '<' | '>')) {
        return Err(ValidationError::new(
            kind,
            ValidationReason::ForbiddenPattern(c.to_string()),
        ));
    }

    if let Some(m) = FORBIDDEN_PATTERN.find(input) {
        return Err(ValidationError::new(
            kind,
            ValidationReason::ForbiddenPattern(m.as_str().to_string()),
        ));
    }

    Ok(())
}
