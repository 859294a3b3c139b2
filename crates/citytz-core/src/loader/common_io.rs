// crates/citytz-core/src/loader/common_io.rs
use crate::error::LoadError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Extension of the payload, looking through a `.gz` wrapper:
/// `cities.json.gz` -> `json`, `cities.bin` -> `bin`.
pub fn payload_extension(path: &Path) -> Option<String> {
    let inner = if is_gzip(path) {
        Path::new(path.file_stem()?)
    } else {
        path
    };
    inner
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

pub fn io_error(path: &Path, e: std::io::Error) -> LoadError {
    if e.kind() == std::io::ErrorKind::NotFound {
        LoadError::NotFound(path.display().to_string())
    } else {
        LoadError::Io(format!("{}: {e}", path.display()))
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>, LoadError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(LoadError::Io(format!(
            "{}: reading .gz files requires the `compact` feature",
            path.display()
        )))
    }
}
