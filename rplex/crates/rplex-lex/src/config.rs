//! Lexer configuration.
//!
//! A [`LexerConfig`] carries the few knobs the engine itself has. Grammars
//! that read their settings from a TOML document can embed it under their
//! own table and hand the parsed value to [`Lexer::with_config`].
//!
//! [`Lexer::with_config`]: crate::Lexer::with_config

use rplex_util::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Default escape marker for `accept_until_unescaped`.
pub const DEFAULT_ESCAPE: char = '\\';

/// Engine configuration.
///
/// # Example
///
/// ```
/// use rplex_lex::LexerConfig;
///
/// let config = LexerConfig::from_toml_str("escape = '^'\nstep_limit = 64").unwrap();
/// assert_eq!(config.escape, '^');
/// assert_eq!(config.step_limit, Some(64));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Rune that escapes the following rune in `accept_until_unescaped`.
    #[serde(default = "default_escape")]
    pub escape: char,

    /// Maximum number of state-function steps `try_run` will take.
    ///
    /// `None` means unbounded.
    #[serde(default)]
    pub step_limit: Option<usize>,
}

fn default_escape() -> char {
    DEFAULT_ESCAPE
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            escape: default_escape(),
            step_limit: None,
        }
    }
}

impl LexerConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: LexerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.step_limit == Some(0) {
            return Err(ConfigError::Validation(
                "step_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the configuration with a different escape marker.
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// Returns the configuration with a step limit for `try_run`.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }
}
