//! Lexer module.
//!
//! This module organizes the engine into smaller, focused components:
//! - `core` - Lexer state, single-rune stepping, emit and ignore
//! - `accept` - Set and predicate driven acceptance
//! - `run` - State functions and the trampoline that drives them

mod accept;
mod core;
mod run;

pub use self::core::{Lexer, LexerSnapshot};
pub use self::run::{LexFn, StateFn};
