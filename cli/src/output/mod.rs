//! User-facing terminal output: styles, renderers, spinners and JSON.

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Where user-facing text goes and how it looks.
///
/// Everything except [`OutputContext::error`] is dropped under `--quiet`.
pub struct OutputContext {
    pub styles: Styles,
    /// stdout is a terminal; spinners are only drawn when it is.
    pub is_tty: bool,
    pub quiet: bool,
}

impl OutputContext {
    /// Colours are used only on a terminal, and never with `--no-color` or
    /// `NO_COLOR` set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let mut styles = Styles::default();
        if is_tty && !no_color && std::env::var_os("NO_COLOR").is_none() {
            styles.colorize();
        }
        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    pub fn success(&self, msg: &str) {
        self.line(format_args!("  {} {msg}", "✓".style(self.styles.ok)));
    }

    pub fn warn(&self, msg: &str) {
        self.line(format_args!("  {} {msg}", "⚠".style(self.styles.caution)));
    }

    /// Goes to stderr and ignores `quiet`.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.failure));
    }

    pub fn info(&self, msg: &str) {
        self.line(format_args!("  {} {msg}", "→".style(self.styles.step)));
    }

    pub fn section(&self, title: &str) {
        self.line(format_args!("  {}", title.style(self.styles.section)));
    }

    /// Aligned `label value` row, as used by `status`.
    pub fn kv(&self, key: &str, value: &str) {
        self.line(format_args!("  {:<16}{value}", key.style(self.styles.label)));
    }

    pub fn blank(&self) {
        self.line(format_args!(""));
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        if !self.quiet {
            println!("{text}");
        }
    }
}
