use serde::Serialize;
use thiserror::Error;

/// A single shape violation found in a configuration artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Dotted location of the offending field, e.g. `toolMetadata.foo.name`.
    pub at: String,
    pub message: String,
}

impl Problem {
    pub fn new(at: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            at: at.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.at.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.at, self.message)
        }
    }
}

/// Errors raised while decoding an artifact before its shape can be checked.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
