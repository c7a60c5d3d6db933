//! Token capability and the default text token.
//!
//! The engine knows exactly one thing about a token: it can be handed the
//! slice of input it was built from. Everything else (kind, literal value,
//! diagnostics) belongs to the grammar. Richer token types either implement
//! [`Token`] directly or wrap a [`TextToken`] and forward to it.
//!
//! # Example
//!
//! ```
//! use rplex_lex::{Token, TextToken};
//!
//! #[derive(Debug, Default)]
//! struct Word {
//!     inner: TextToken,
//!     shouted: bool,
//! }
//!
//! impl Token for Word {
//!     fn set_text(&mut self, text: String) {
//!         self.shouted = text.chars().all(|c| !c.is_lowercase());
//!         self.inner.set_text(text);
//!     }
//!
//!     fn text(&self) -> &str {
//!         self.inner.text()
//!     }
//! }
//!
//! let mut word = Word::default();
//! word.set_text("HEY".to_string());
//! assert!(word.shouted);
//! ```

use rplex_util::Span;

/// A chunk of emitted text.
pub trait Token {
    /// Stores the text the token was emitted from.
    fn set_text(&mut self, text: String);

    /// Returns the token's text.
    fn text(&self) -> &str;

    /// Stores where in the input the token was emitted from.
    ///
    /// Called by [`Lexer::emit`](crate::Lexer::emit) right after
    /// [`set_text`](Token::set_text). Tokens that do not track locations can
    /// keep the default, which drops the span.
    fn set_span(&mut self, span: Span) {
        let _ = span;
    }
}

/// The default token: its text and where it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextToken {
    text: String,
    span: Span,
}

impl TextToken {
    /// Creates an unset token, ready to be passed to `emit`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the token in the input.
    ///
    /// [`Span::DUMMY`] until the token is emitted.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Token for TextToken {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_span(&mut self, span: Span) {
        self.span = span;
    }
}

impl<T: Token + ?Sized> Token for Box<T> {
    fn set_text(&mut self, text: String) {
        (**self).set_text(text);
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn set_span(&mut self, span: Span) {
        (**self).set_span(span);
    }
}
