// crates/citytz-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (JSON vs binary snapshot). [`Dataset`] wraps a
//! [`DatasetProvider`] so that the provider runs at most once, however many
//! threads ask for the records at the same time.
//!
//! [`EmbeddedDataset`] is a small sample (a few dozen cities picked to cover
//! duplicate names, non-ASCII names and several countries). It keeps the
//! crate self-contained and is what the tests and doc examples run against.
//! Deployments that need the full city list should load it with
//! [`FileDataset`] (or `citytz --input <path>`).

use crate::error::LoadError;
use crate::model::CityRecord;
use crate::text::ascii_fold;
use crate::traits::DatasetProvider;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod common_io;
pub mod snapshot;

pub use common_io::open_stream;

/// The JSON dataset compiled into the crate.
static EMBEDDED_JSON: &str = include_str!("../../data/cities.json");

/// Directory holding the bundled dataset sources.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "cities.json"
}

/// Parse a JSON array of records from any reader.
pub fn parse_json(reader: impl std::io::Read) -> Result<Vec<CityRecord>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

// -----------------------------------------------------------------------------
// PROVIDERS
// -----------------------------------------------------------------------------

/// The sample dataset bundled with the crate. The default provider.
///
/// Not a complete city list; see the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl DatasetProvider for EmbeddedDataset {
    fn load(&self) -> Result<Vec<CityRecord>, LoadError> {
        Ok(serde_json::from_str(EMBEDDED_JSON)?)
    }

    fn source(&self) -> String {
        "embedded sample dataset".to_string()
    }
}

/// A dataset on disk.
///
/// The format follows the file name: `*.json` / `*.json.gz` are parsed as a
/// JSON array of records, `*.bin` / `*.bin.gz` as a [`snapshot`].
/// Gzip needs the `compact` feature.
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetProvider for FileDataset {
    fn load(&self) -> Result<Vec<CityRecord>, LoadError> {
        match common_io::payload_extension(&self.path).as_deref() {
            Some("bin") => snapshot::read(&self.path),
            _ => parse_json(open_stream(&self.path)?),
        }
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// Records already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticDataset(pub Vec<CityRecord>);

impl DatasetProvider for StaticDataset {
    fn load(&self) -> Result<Vec<CityRecord>, LoadError> {
        Ok(self.0.clone())
    }

    fn source(&self) -> String {
        format!("{} in-memory records", self.0.len())
    }
}

// -----------------------------------------------------------------------------
// LAZY, LOAD-ONCE DATASET
// -----------------------------------------------------------------------------

/// Load-once view over a provider.
///
/// The first call to [`Dataset::records`] runs the provider; concurrent first
/// callers block until that single load finishes. The outcome is kept either
/// way: a failed load is reported to every later caller and is not retried.
/// Build a new `Dataset` to try again.
pub struct Dataset {
    provider: Box<dyn DatasetProvider>,
    records: OnceCell<Result<Vec<CityRecord>, LoadError>>,
}

impl Dataset {
    pub fn new(provider: impl DatasetProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            records: OnceCell::new(),
        }
    }

    /// The full record set, loading it on first use.
    pub fn records(&self) -> Result<&[CityRecord], LoadError> {
        match self.records.get_or_init(|| self.materialize()) {
            Ok(records) => Ok(records.as_slice()),
            Err(e) => Err(e.clone()),
        }
    }

    /// Whether a load has been attempted (successfully or not).
    pub fn is_initialized(&self) -> bool {
        self.records.get().is_some()
    }

    fn materialize(&self) -> Result<Vec<CityRecord>, LoadError> {
        let source = self.provider.source();
        info!(%source, "loading city dataset");

        let outcome = self.provider.load().and_then(|mut records| {
            if records.is_empty() {
                return Err(LoadError::Empty);
            }
            for record in records.iter_mut().filter(|r| r.city_ascii.is_empty()) {
                record.city_ascii = ascii_fold(&record.city);
            }
            Ok(records)
        });

        match &outcome {
            Ok(records) => info!(%source, records = records.len(), "city dataset loaded"),
            Err(e) => warn!(%source, error = %e, "city dataset failed to load"),
        }
        outcome
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(EmbeddedDataset)
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("source", &self.provider.source())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
