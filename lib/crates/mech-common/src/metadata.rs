//! Metadata-hash descriptor (`.metadata_hash.json`).
//!
//! The descriptor is pinned to IPFS by the agent tooling and advertised
//! on-chain. Every field is decoded leniently so that [`MetadataDescriptor::check`]
//! can report all shape violations at once instead of stopping at the first
//! missing field.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::problem::{ArtifactError, Problem};

/// Top-level descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputFormat")]
    pub input_format: String,
    #[serde(rename = "outputFormat")]
    pub output_format: String,
    /// Image reference, usually an IPFS gateway URL.
    pub image: String,
    pub tools: Vec<String>,
    #[serde(rename = "toolMetadata")]
    pub tool_metadata: BTreeMap<String, ToolMetadata>,
}

/// Per-tool entry under `toolMetadata`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolMetadata {
    pub name: String,
    pub description: String,
    pub input: Option<ToolInput>,
    pub output: Option<ToolOutput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolOutput {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub schema: Option<OutputSchema>,
}

/// JSON-schema fragment describing a tool's response object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BTreeMap<String, serde_json::Value>,
    pub required: Vec<String>,
}

impl MetadataDescriptor {
    /// Decode a descriptor from JSON text.
    ///
    /// Fails only when the text is not JSON or a field has the wrong JSON
    /// type; missing fields decode to empty values and surface in `check`.
    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check required fields and the cross-references between `tools`,
    /// `toolMetadata`, and each output schema's `required` list.
    #[must_use]
    pub fn check(&self) -> Vec<Problem> {
        let mut problems = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("inputFormat", &self.input_format),
            ("outputFormat", &self.output_format),
            ("image", &self.image),
        ] {
            require_text(&mut problems, field, value);
        }

        if self.tools.is_empty() {
            problems.push(Problem::new("tools", "no tools declared"));
        }
        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.as_str()) {
                problems.push(Problem::new("tools", format!("'{tool}' is declared twice")));
            }
            if !self.tool_metadata.contains_key(tool) {
                problems.push(Problem::new(
                    "toolMetadata",
                    format!("missing entry for declared tool '{tool}'"),
                ));
            }
        }

        for (tool, meta) in &self.tool_metadata {
            let at = format!("toolMetadata.{tool}");
            if !seen.contains(tool.as_str()) {
                problems.push(Problem::new(&at, "tool is not listed in 'tools'"));
            }
            meta.check_into(&at, &mut problems);
        }

        problems
    }
}

impl ToolMetadata {
    fn check_into(&self, at: &str, problems: &mut Vec<Problem>) {
        require_text(problems, &format!("{at}.name"), &self.name);
        require_text(problems, &format!("{at}.description"), &self.description);

        match &self.input {
            Some(input) => require_text(problems, &format!("{at}.input.type"), &input.kind),
            None => problems.push(Problem::new(format!("{at}.input"), "missing")),
        }

        let Some(output) = &self.output else {
            problems.push(Problem::new(format!("{at}.output"), "missing"));
            return;
        };
        require_text(problems, &format!("{at}.output.type"), &output.kind);

        if let Some(schema) = &output.schema {
            for field in &schema.required {
                if !schema.properties.contains_key(field) {
                    problems.push(Problem::new(
                        format!("{at}.output.schema.required"),
                        format!("'{field}' is not defined in properties"),
                    ));
                }
            }
        }
    }
}

fn require_text(problems: &mut Vec<Problem>, at: &str, value: &str) {
    if value.trim().is_empty() {
        problems.push(Problem::new(at, "missing or empty"));
    }
}
