//! rplex-lex - A scanning engine for hand-written lexers
//!
//! This crate does not know any grammar. It gives a lexer author the moving
//! parts every hand-written tokenizer needs and lets them write the grammar
//! as a chain of small state functions.
//!
//! # Overview
//!
//! A [`Lexer`] walks a complete input text one rune (`char`) at a time. The
//! text between the last token boundary and the current position is
//! *pending*; [`Lexer::emit`] turns it into a token, [`Lexer::ignore`]
//! throws it away. The accept family ([`Lexer::accept`],
//! [`Lexer::accept_run`], [`Lexer::accept_until`], ...) consumes runes that
//! match a [`RuneSet`] or a predicate and steps back over the first one that
//! does not.
//!
//! A grammar is a set of state functions. Each takes the lexer, scans, and
//! returns the next [`LexFn`] or `None`. [`Lexer::run`] drives them in a
//! loop and returns the emitted tokens.
//!
//! # Example Usage
//!
//! ```
//! use rplex_lex::{LexFn, Lexer, TextToken, Token};
//!
//! fn lex_key<'a>(l: &mut Lexer<'a>) -> Option<LexFn<'a>> {
//!     l.accept_until("=");
//!     l.emit(TextToken::new());
//!     l.accept("=");
//!     l.ignore();
//!     Some(LexFn::from_fn(lex_value))
//! }
//!
//! fn lex_value<'a>(l: &mut Lexer<'a>) -> Option<LexFn<'a>> {
//!     l.accept_until(";");
//!     l.emit(TextToken::new());
//!     if l.accept(";") {
//!         l.ignore();
//!         Some(LexFn::from_fn(lex_key))
//!     } else {
//!         None
//!     }
//! }
//!
//! let mut lexer: Lexer<'_> = Lexer::new("a=1;b=2");
//! let texts: Vec<&str> = lexer
//!     .run(LexFn::from_fn(lex_key))
//!     .iter()
//!     .map(|t| t.text())
//!     .collect();
//! assert_eq!(texts, ["a", "1", "b", "2"]);
//! ```
//!
//! # Module Structure
//!
//! - [`lexer`] - Lexer state, accept family and the state-function runner
//! - [`token`] - The [`Token`] capability and the default [`TextToken`]
//! - [`rune_set`] - Rune membership tests used by the accept family
//! - [`config`] - Engine configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod lexer;
pub mod rune_set;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use lexer::{LexFn, Lexer, LexerSnapshot, StateFn};
pub use rplex_util::{ConfigError, LexError, Span};
pub use rune_set::RuneSet;
pub use token::{TextToken, Token};
