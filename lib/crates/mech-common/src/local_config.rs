//! Local quickstart settings (`.mech_quickstart/local_config.json`).
//!
//! Written by the agent's interactive setup; the launcher only ever reads it.

use serde::{Deserialize, Serialize};

use crate::problem::ArtifactError;

/// File name of the local settings inside the quickstart home directory.
pub const LOCAL_CONFIG_FILE: &str = "local_config.json";

/// Settings persisted by the interactive setup. Every field is optional;
/// unknown fields are ignored so newer agent versions stay readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    pub gnosis_rpc: Option<String>,
    pub home_chain_id: Option<u64>,
    pub use_staking: Option<bool>,
    pub password_migrated: Option<bool>,
    pub api_keys_path: Option<String>,
    pub metadata_hash: Option<String>,
    pub agent_id: Option<u64>,
    pub mech_address: Option<String>,
    pub mech_hash: Option<String>,
    pub tools_to_packages_hash: Option<serde_json::Value>,
}

impl LocalConfig {
    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Human name of the home chain, if known.
    #[must_use]
    pub fn chain_name(&self) -> Option<String> {
        self.home_chain_id.map(|id| match id {
            100 => "Gnosis".to_string(),
            other => format!("Chain {other}"),
        })
    }

    /// The RPC URL reduced to scheme and host.
    #[must_use]
    pub fn redacted_rpc(&self) -> Option<String> {
        self.gnosis_rpc.as_deref().map(redact_url)
    }
}

/// Reduce a URL to `scheme://host[:port]`. RPC URLs commonly embed API keys
/// in the path or query, so nothing past the authority is kept. Strings that
/// do not parse as URLs are fully masked.
#[must_use]
pub fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(url) => match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}://{host}:{port}", url.scheme()),
            (Some(host), None) => format!("{}://{host}", url.scheme()),
            (None, _) => "***".to_string(),
        },
        Err(_) => "***".to_string(),
    }
}
