//! Linter option hierarchy: a global switch and per-linter overrides.

use std::collections::HashMap;
use thiserror::Error;

/// Name of the option that toggles every linter at once.
pub const LINTER_ALL: &str = "linter.all";

/// Full option name controlling a single linter (`linter.<name>`).
#[must_use]
pub fn linter_option_name(linter: &str) -> String {
    format!("linter.{linter}")
}

/// Read-only table of linter options.
///
/// Entries are typed TOML values, registered once at session start by
/// the embedding tool. This core only ever reads boolean-typed entries
/// and silently falls back to caller-supplied defaults for missing or
/// mistyped ones.
#[derive(Debug, Clone, Default)]
pub struct LinterOptions {
    values: HashMap<String, toml::Value>,
}

impl LinterOptions {
    /// Creates an empty option table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option value.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Parses an option table from a TOML string.
    ///
    /// Option names with dots must be quoted, e.g.
    /// `"linter.all" = false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, OptionsError> {
        let values = toml::from_str(content).map_err(|e| OptionsError::Parse {
            message: e.to_string(),
        })?;
        Ok(Self { values })
    }

    /// Looks up a boolean-typed option, ignoring mistyped entries.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(toml::Value::as_bool)
    }
}

/// Resolves the global "enable all linters" switch.
#[must_use]
pub fn get_linter_all(options: &LinterOptions, default: bool) -> bool {
    options.get_bool(LINTER_ALL).unwrap_or(default)
}

/// Resolves a linter's effective enabled state.
///
/// A well-typed `linter.<name>` entry overrides the global switch
/// entirely, so a linter can be force-enabled while all linters are
/// globally off and vice versa. Otherwise the global switch (falling
/// back to `all_default`) decides.
#[must_use]
pub fn get_linter_value(options: &LinterOptions, linter: &str, all_default: bool) -> bool {
    options
        .get_bool(&linter_option_name(linter))
        .unwrap_or_else(|| get_linter_all(options, all_default))
}

/// Option-table errors.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Parse error in the option TOML.
    #[error("Failed to parse options: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
