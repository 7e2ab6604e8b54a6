//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifacts;
pub mod command;
pub mod config;
pub mod error;
pub mod health;
pub mod status;

pub use command::CommandSpec;
pub use config::{ArtifactPaths, LauncherConfig, LauncherSection, ServiceSection};
pub use error::{ConfigError, LaunchError};
pub use health::{DoctorChecks, ToolCheck, collect_issues};
pub use status::{ContainerState, StatusReport};
