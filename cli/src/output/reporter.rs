//! Adapters from the `ProgressReporter` port to the terminal.

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Forwards launcher and doctor progress to an `OutputContext`, so `--quiet`
/// and colour settings apply to it as well.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.ctx.info(message);
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }
}

/// Drops every event. Used with `--json` so stdout carries only the document.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}
