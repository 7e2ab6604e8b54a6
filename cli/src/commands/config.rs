//! `mech-quickstart config`: show the effective launcher configuration.

use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use crate::app::AppContext;
use crate::domain::config::LauncherConfig;
use crate::output::human::HumanRenderer;
use crate::output::json;

#[derive(Serialize)]
struct ConfigJson<'a> {
    source: String,
    config: &'a LauncherConfig,
}

/// Print the effective configuration and where it was loaded from.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let source = app.config_source.to_string();
    if app.is_json() {
        let out = ConfigJson {
            source,
            config: &app.config,
        };
        println!("{}", json::to_pretty(&out)?);
    } else {
        HumanRenderer::new(&app.output).render_config(&app.config, &source);
    }
    Ok(ExitCode::SUCCESS)
}
