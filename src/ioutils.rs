use std::path::Path;

use crate::error::{Error, Result};

/// Reads an entire file into a string.
pub fn read_file_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path.as_ref()).map_err(Error::IoError)
}

/// Truncates and rewrites an existing file in place.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    std::fs::write(dest_path.as_ref(), content).map_err(Error::IoError)
}
