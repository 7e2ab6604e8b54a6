//! External command descriptions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// A program plus its arguments, written in config as a YAML list
/// (`["poetry", "install"]`). Never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Build a command from string literals.
    ///
    /// # Errors
    ///
    /// Returns an error if `program` is empty or whitespace.
    pub fn new<S: Into<String>>(
        program: S,
        args: impl IntoIterator<Item = S>,
    ) -> Result<Self, ConfigError> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(ConfigError::EmptyCommand);
        }
        Ok(Self {
            program,
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments as borrowed slices, ready for `CommandRunner` calls.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl TryFrom<Vec<String>> for CommandSpec {
    type Error = ConfigError;

    fn try_from(mut parts: Vec<String>) -> Result<Self, Self::Error> {
        if parts.is_empty() {
            return Err(ConfigError::EmptyCommand);
        }
        let program = parts.remove(0);
        Self::new(program, parts)
    }
}

impl From<CommandSpec> for Vec<String> {
    fn from(cmd: CommandSpec) -> Self {
        std::iter::once(cmd.program).chain(cmd.args).collect()
    }
}

impl fmt::Display for CommandSpec {
    /// Shell-like rendering for messages; arguments containing whitespace or
    /// quotes are single-quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(s: &str) -> String {
    if !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}
