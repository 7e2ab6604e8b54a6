//! Validation report for the agent's configuration artifacts.

use mech_common::Problem;
use serde::Serialize;

/// Problems found in one artifact file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub problems: Vec<Problem>,
}

impl FileReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Outcome of `validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub metadata_hash: FileReport,
    pub api_keys: FileReport,
}

impl ValidationReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.metadata_hash.is_ok() && self.api_keys.is_ok()
    }

    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.metadata_hash.problems.len() + self.api_keys.problems.len()
    }
}
