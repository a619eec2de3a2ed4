use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ImageError, Result};

/// Reads the whole file into memory. Scanners index into the complete
/// buffer, so there is no streaming variant.
pub fn read_binary_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let data = fs::read(path).map_err(|source| ImageError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = data.len(), "read image file");
    Ok(data)
}
