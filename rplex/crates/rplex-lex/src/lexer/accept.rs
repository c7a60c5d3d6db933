//! Accept family.
//!
//! Every method here steps with `advance` and tests the rune. A rune that
//! does not match is stepped back over, so each call consumes exactly the
//! runes it accepted. The end-of-input sentinel matches no set and no
//! predicate.

use crate::lexer::Lexer;
use crate::rune_set::RuneSet;
use crate::token::Token;

impl<'a, T: Token> Lexer<'a, T> {
    /// Consumes the next rune if it is in `set`.
    ///
    /// Returns whether a rune was consumed.
    #[inline]
    pub fn accept<S: RuneSet>(&mut self, set: S) -> bool {
        self.accept_func(|r| set.contains_rune(r))
    }

    /// Consumes runes for as long as they are in `set`.
    ///
    /// Returns the number of runes consumed, possibly zero.
    #[inline]
    pub fn accept_run<S: RuneSet>(&mut self, set: S) -> usize {
        self.accept_run_func(|r| set.contains_rune(r))
    }

    /// Consumes the next rune if `pred` holds for it.
    pub fn accept_func<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(char) -> bool,
    {
        match self.advance() {
            Some(r) if pred(r) => true,
            _ => {
                self.backtrack();
                false
            },
        }
    }

    /// Consumes runes for as long as `pred` holds.
    ///
    /// Returns the number of runes consumed, possibly zero.
    pub fn accept_run_func<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut count = 0;
        while self.accept_func(&mut pred) {
            count += 1;
        }
        count
    }

    /// Consumes runes up to, not including, the first rune in `delims`.
    ///
    /// Stops at end of input when no delimiter turns up. Returns the number
    /// of runes consumed.
    pub fn accept_until<S: RuneSet>(&mut self, delims: S) -> usize {
        let mut count = 0;
        loop {
            match self.advance() {
                None => return count,
                Some(r) if delims.contains_rune(r) => {
                    self.backtrack();
                    return count;
                },
                Some(_) => count += 1,
            }
        }
    }

    /// Like [`accept_until`](Lexer::accept_until), but skips over escaped
    /// delimiters.
    ///
    /// The escape marker comes from [`LexerConfig::escape`] (`\` by default).
    /// A marker escapes exactly the one rune after it, which is consumed
    /// whatever it is, and then escaping is off again. So in `\\"` the second
    /// backslash is the escaped rune and the quote still stops the scan. An
    /// unescaped marker never counts as a delimiter. End of input stops the
    /// scan, including right after a marker.
    ///
    /// Returns the number of runes consumed.
    ///
    /// ```
    /// use rplex_lex::Lexer;
    ///
    /// let mut lexer: Lexer<'_> = Lexer::new(r#"say \"hi\"" rest"#);
    /// lexer.accept_until_unescaped('"');
    /// assert_eq!(lexer.pending(), r#"say \"hi\""#);
    /// assert_eq!(lexer.remaining(), r#"" rest"#);
    /// ```
    ///
    /// [`LexerConfig::escape`]: crate::LexerConfig::escape
    pub fn accept_until_unescaped<S: RuneSet>(&mut self, delims: S) -> usize {
        let escape = self.config().escape;
        let mut escaped = false;
        let mut count = 0;

        loop {
            match self.advance() {
                None => return count,
                Some(_) if escaped => escaped = false,
                Some(r) if r == escape => escaped = true,
                Some(r) if delims.contains_rune(r) => {
                    self.backtrack();
                    return count;
                },
                Some(_) => {},
            }
            count += 1;
        }
    }
}
