//! Infrastructure layer: production implementations of the application ports.

pub mod command_runner;
pub mod config;
pub mod fs;
pub mod handoff;

pub use command_runner::{DEFAULT_CMD_TIMEOUT, TokioCommandRunner};
pub use config::{ConfigSource, YamlConfigStore};
pub use fs::StdLocalFs;
pub use handoff::ExecHandoff;
