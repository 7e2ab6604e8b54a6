//! Infrastructure implementation of the `LocalFs` port.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;

/// `std::fs`-backed, read-only file access.
pub struct StdLocalFs;

impl LocalFs for StdLocalFs {
    fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
