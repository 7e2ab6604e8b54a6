//! Application service: shape checks for the agent's configuration artifacts.
//!
//! Read-only: neither file is ever rewritten.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use mech_common::{MetadataDescriptor, Problem, check_api_keys};

use crate::application::ports::LocalFs;
use crate::domain::artifacts::{FileReport, ValidationReport};
use crate::domain::config::ArtifactPaths;

/// Check the metadata-hash descriptor and the API-key map.
///
/// # Errors
///
/// Returns an error only when a file exists but cannot be read; missing files,
/// non-UTF-8 bytes and malformed content are reported as problems.
pub fn validate_artifacts(fs: &impl LocalFs, paths: &ArtifactPaths) -> Result<ValidationReport> {
    let metadata_hash = check_file(fs, &paths.metadata_hash, |text| {
        match MetadataDescriptor::from_json(text) {
            Ok(descriptor) => descriptor.check(),
            Err(e) => vec![Problem::new("", e.to_string())],
        }
    })?;

    let api_keys = check_file(fs, &paths.api_keys, |text| {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) => check_api_keys(&value),
            Err(e) => vec![Problem::new("", format!("invalid JSON: {e}"))],
        }
    })?;

    Ok(ValidationReport {
        metadata_hash,
        api_keys,
    })
}

fn check_file(
    fs: &impl LocalFs,
    path: &Path,
    check: impl FnOnce(&str) -> Vec<Problem>,
) -> Result<FileReport> {
    let problems = match fs.read_to_string(path) {
        Ok(Some(text)) => check(&text),
        Ok(None) => vec![Problem::new("", "file not found")],
        Err(e) if is_not_utf8(&e) => vec![Problem::new("", "not valid UTF-8 JSON")],
        Err(e) => return Err(e),
    };
    Ok(FileReport {
        path: path.display().to_string(),
        problems,
    })
}

fn is_not_utf8(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::InvalidData)
}
