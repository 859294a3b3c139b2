// crates/citytz-core/src/error.rs

//! Error kinds produced by the search core.
//!
//! Three outcomes never overlap:
//! - the input was rejected ([`ValidationError`]),
//! - the dataset could not be materialized ([`LoadError`]),
//! - nothing matched, which is an `Ok` with an empty vector and not an error.

use std::fmt;
use thiserror::Error;

/// Which validation rules were applied to a raw input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    CityName,
    SearchString,
    IsoCode,
}

impl InputKind {
    /// Maximum accepted length in characters.
    pub const fn max_len(self) -> usize {
        match self {
            InputKind::CityName => 100,
            InputKind::SearchString => 200,
            InputKind::IsoCode => 3,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::CityName => "city name",
            InputKind::SearchString => "search string",
            InputKind::IsoCode => "ISO code",
        })
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    TooLong { len: usize, max: usize },
    /// Markup or script-like content, e.g. `<script>` or `javascript:`.
    ForbiddenPattern(String),
    ControlCharacter,
    InvalidIsoCode,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::TooLong { len, max } => {
                write!(f, "too long ({len} characters, at most {max} allowed)")
            }
            ValidationReason::ForbiddenPattern(p) => write!(f, "contains forbidden content `{p}`"),
            ValidationReason::ControlCharacter => f.write_str("contains control or format characters"),
            ValidationReason::InvalidIsoCode => {
                f.write_str("expected a 2 or 3 letter ISO country code")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {reason}")]
pub struct ValidationError {
    pub kind: InputKind,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(kind: InputKind, reason: ValidationReason) -> Self {
        Self { kind, reason }
    }
}

/// The dataset failed to materialize.
///
/// Causes are captured as strings so one failed load can be handed to every
/// caller that asks for the dataset afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Dataset not found at {0}")]
    NotFound(String),

    #[error("I/O error while reading dataset: {0}")]
    Io(String),

    #[error("Dataset JSON could not be parsed: {0}")]
    Parse(String),

    #[error("Dataset snapshot could not be decoded: {0}")]
    Snapshot(String),

    #[error("Dataset is empty")]
    Empty,
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

impl From<bincode::Error> for LoadError {
    fn from(e: bincode::Error) -> Self {
        LoadError::Snapshot(e.to_string())
    }
}

/// Everything a search call can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("dataset unavailable: {0}")]
    Load(#[from] LoadError),
}

impl CityError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CityError::Validation(_))
    }

    pub fn is_load(&self) -> bool {
        matches!(self, CityError::Load(_))
    }
}

pub type Result<T> = std::result::Result<T, CityError>;
