pub mod api_keys;
pub mod local_config;
pub mod metadata;
pub mod problem;

pub use api_keys::check_api_keys;
pub use local_config::{LOCAL_CONFIG_FILE, LocalConfig, redact_url};
pub use metadata::{MetadataDescriptor, OutputSchema, ToolInput, ToolMetadata, ToolOutput};
pub use problem::{ArtifactError, Problem};
