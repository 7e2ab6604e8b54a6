//! Command implementations

pub mod config;
pub mod doctor;
pub mod logs;
pub mod run;
pub mod status;
pub mod stop;
pub mod validate;
pub mod version;
