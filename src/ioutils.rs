use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Creates `dest_path` and any missing parents. Succeeds when it already exists.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    log::debug!("Writing '{}'", dest_path.display());
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Writes `value` as JSON indented with two spaces, followed by a newline.
pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(value: &T, dest_path: P) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    write_file(&content, dest_path)
}

/// Reads a JSON document, naming the file in the error when it is missing or malformed.
pub fn read_json<P: AsRef<Path>>(source_path: P) -> Result<serde_json::Value> {
    let source_path = source_path.as_ref();
    let manifest_error =
        |reason: String| Error::ManifestError { path: source_path.display().to_string(), reason };

    let buf = std::fs::read_to_string(source_path).map_err(|e| manifest_error(e.to_string()))?;
    serde_json::from_str(&buf).map_err(|e| manifest_error(e.to_string()))
}
