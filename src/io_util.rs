use std::{path::Path, fs::read_to_string, io::ErrorKind};

use anyhow::{Result, anyhow, Context};

/// Read a file, `Ok(None)` if it doesn't exist.
pub fn read_to_string_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    match read_to_string(&path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(
            || anyhow!("opening path for reading: {:?}", path.as_ref())),
    }
}
