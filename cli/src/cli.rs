//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Launch and operate the Mech agent service from a quickstart checkout
#[derive(Parser)]
#[command(name = "mech-quickstart", version, propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Show diagnostic logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Stop any previous instance, install dependencies and start the service
    Run,

    /// Stop the service
    Stop,

    /// Show container state and quickstart settings
    Status,

    /// Follow the service logs
    Logs(commands::logs::LogsArgs),

    /// Check the metadata-hash and API-key files
    Validate(commands::validate::ValidateArgs),

    /// Check prerequisites
    Doctor,

    /// Show the effective launcher configuration
    Config,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            command,
            ..
        } = self;
        let flags = AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes },
        };
        let context = || AppContext::new(&flags);

        match command.unwrap_or(Command::Run) {
            Command::Run => commands::run::run(&context()?).await,
            Command::Stop => commands::stop::run(&context()?).await,
            Command::Status => commands::status::run(&context()?).await,
            Command::Logs(args) => commands::logs::run(&context()?, &args),
            Command::Validate(args) => commands::validate::run(&context()?, args),
            Command::Doctor => commands::doctor::run(&context()?).await,
            Command::Config => commands::config::run(&context()?),
            Command::Version => {
                commands::version::run(json);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
