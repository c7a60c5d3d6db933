//! rplex-util - Foundation types for the rplex scanning engine
//!
//! This crate holds the pieces that embedders of `rplex-lex` see in their own
//! token types and error paths, without pulling in the engine itself:
//!
//! - [`span`] - byte-offset spans with 1-based line/column information, and
//!   the [`LineIndex`] that resolves offsets into line/column pairs.
//! - [`error`] - the [`LexError`] and [`ConfigError`] types.
//!
//! # Example
//!
//! ```
//! use rplex_util::{LineIndex, Span};
//!
//! let index = LineIndex::new("let x\nlet y");
//! assert_eq!(index.line_col(6), (2, 1));
//!
//! let span = index.span(6, 9);
//! assert_eq!(span, Span::new(6, 9, 2, 1));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{ConfigError, ConfigResult, LexError, LexResult};
pub use span::{LineIndex, Span};
