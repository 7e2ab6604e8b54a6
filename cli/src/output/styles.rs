//! Terminal stylesheet.
//!
//! Every field starts as a no-op `Style` so piped output stays plain;
//! `colorize` fills them in when stdout is a colour-capable terminal.

use owo_colors::Style;

#[derive(Default, Clone)]
pub struct Styles {
    /// `✓` marks and healthy states.
    pub ok: Style,
    /// `⚠` marks, stopped or unknown containers.
    pub caution: Style,
    /// `✗` marks and failed checks.
    pub failure: Style,
    /// Launcher step arrows and hints.
    pub step: Style,
    /// Left-hand labels in key/value listings.
    pub label: Style,
    /// Section names inside a report.
    pub section: Style,
    /// The boxed title and report headings.
    pub banner: Style,
    /// Program invocations shown to the user.
    pub command: Style,
}

impl Styles {
    pub fn colorize(&mut self) {
        self.ok = Style::new().green();
        self.caution = Style::new().yellow();
        self.failure = Style::new().red();
        self.step = Style::new().blue();
        self.label = Style::new().dimmed();
        self.section = Style::new().bold();
        self.banner = Style::new().bold().magenta();
        self.command = Style::new().cyan();
    }
}
