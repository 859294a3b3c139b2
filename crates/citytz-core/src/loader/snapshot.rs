// crates/citytz-core/src/loader/snapshot.rs

//! Binary dataset snapshots (bincode), optionally gzip-wrapped.
//!
//! A snapshot is the serialized `Vec<CityRecord>`. It loads faster than the
//! source JSON and is what `citytz build` produces.

use super::common_io::{io_error, is_gzip, open_stream};
use crate::error::LoadError;
use crate::model::CityRecord;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Upper bound on decoded snapshot size, against corrupted length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

pub fn from_reader(reader: impl Read) -> Result<Vec<CityRecord>, LoadError> {
    Ok(options().deserialize_from(reader)?)
}

pub fn read(path: &Path) -> Result<Vec<CityRecord>, LoadError> {
    from_reader(open_stream(path)?)
}

/// Write `records` as a snapshot. Paths ending in `.gz` are gzip-compressed.
pub fn write(records: &[CityRecord], path: &Path) -> Result<(), LoadError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            options().serialize_into(&mut encoder, records)?;
            encoder.finish()?.flush()?;
            return Ok(());
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(LoadError::Io(format!(
                "{}: writing .gz files requires the `compact` feature",
                path.display()
            )));
        }
    }

    options().serialize_into(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
