//! Error types for the rplex workspace
//!
//! Scanning itself never fails: running out of input is reported through the
//! end-of-input sentinel. The errors here cover the two fallible edges of the
//! engine, bounded runs and configuration.

use thiserror::Error;

/// Error type for lexer runs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A bounded run took more state-function steps than allowed
    #[error("Step limit exceeded: {limit} steps taken, stopped at byte {pos}")]
    StepLimitExceeded {
        /// The configured limit
        limit: usize,
        /// Byte offset of the lexer when the run was stopped
        pos: usize,
    },
}

/// Error type for lexer configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration parsed but holds an unusable value
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for lexer runs
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
