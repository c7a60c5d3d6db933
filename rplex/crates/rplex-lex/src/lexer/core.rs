//! Core lexer state.
//!
//! This module contains the Lexer struct, single-rune stepping with one-step
//! backtracking, and the emit/ignore pair that cuts the input into tokens.

use rplex_util::{LineIndex, Span};
use tracing::trace;

use crate::config::LexerConfig;
use crate::token::{TextToken, Token};

/// Scanning state over one complete input text.
///
/// The lexer walks the text one rune at a time. Everything between
/// `token_start` and `pos` is pending: [`emit`](Lexer::emit) turns it into a
/// token, [`ignore`](Lexer::ignore) drops it. At every point between steps
/// `token_start <= pos <= text.len()` holds and `pos` sits on a character
/// boundary.
///
/// `T` is the token type produced by this run. It defaults to [`TextToken`].
///
/// # Example
///
/// ```
/// use rplex_lex::{Lexer, TextToken, Token};
///
/// let mut lexer: Lexer<'_> = Lexer::new("let x");
/// lexer.accept_run('a'..='z');
/// lexer.emit(TextToken::new());
/// lexer.accept(' ');
/// lexer.ignore();
/// lexer.accept_run('a'..='z');
/// lexer.emit(TextToken::new());
///
/// let texts: Vec<&str> = lexer.tokens().iter().map(|t| t.text()).collect();
/// assert_eq!(texts, ["let", "x"]);
/// ```
#[derive(Debug)]
pub struct Lexer<'a, T = TextToken> {
    /// The raw input text.
    text: &'a str,

    /// Line-start table used to locate emitted tokens.
    lines: LineIndex<'a>,

    /// Current byte offset in the text.
    pos: usize,

    /// Byte width of the most recently decoded rune.
    width: usize,

    /// Most recently decoded rune, `None` at end of input.
    current: Option<char>,

    /// Rune decoded before `current`.
    previous: Option<char>,

    /// Byte offset where the pending token starts.
    token_start: usize,

    /// Tokens emitted so far, in order.
    tokens: Vec<T>,

    config: LexerConfig,
}

/// A saved lexer position for multi-step backtracking.
///
/// Taken with [`Lexer::snapshot`] and given back to [`Lexer::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerSnapshot {
    pos: usize,
    width: usize,
    current: Option<char>,
    previous: Option<char>,
    token_start: usize,
    token_count: usize,
}

impl LexerSnapshot {
    /// Byte offset the snapshot returns to.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl<'a, T: Token> Lexer<'a, T> {
    /// Creates a lexer at the start of `text` with the default configuration.
    pub fn new(text: &'a str) -> Self {
        Self::with_config(text, LexerConfig::default())
    }

    /// Creates a lexer at the start of `text`.
    pub fn with_config(text: &'a str, config: LexerConfig) -> Self {
        Self {
            text,
            lines: LineIndex::new(text),
            pos: 0,
            width: 0,
            current: None,
            previous: None,
            token_start: 0,
            tokens: Vec::new(),
            config,
        }
    }

    /// Decodes the next rune and moves past it.
    ///
    /// Shifts `current` into `previous` and records the rune's width so that
    /// one [`backtrack`](Lexer::backtrack) can undo the step. At end of input
    /// this returns `None` and records a width of zero: `pos` stays at the end
    /// and a following `backtrack` leaves it there.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let next = self.text[self.pos..].chars().next();
        let width = next.map_or(0, char::len_utf8);

        self.pos += width;
        self.width = width;

        self.previous = self.current;
        self.current = next;

        next
    }

    /// Moves back over the rune decoded by the last [`advance`](Lexer::advance).
    ///
    /// Only one step can be undone: the recorded width is cleared, so a second
    /// `backtrack` without an `advance` in between does nothing. `current`
    /// and `previous` are left as they are.
    #[inline]
    pub fn backtrack(&mut self) {
        debug_assert!(self.width <= self.pos, "backtrack past start of input");
        self.pos -= self.width;
        self.width = 0;
    }

    /// Returns the next rune without consuming it.
    ///
    /// Leaves the lexer exactly as it was: `width`, `current` and `previous`
    /// are put back, so a `backtrack` after a peek still undoes the last
    /// `advance`.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        let (width, current, previous) = (self.width, self.current, self.previous);
        let next = self.advance();
        self.backtrack();
        self.width = width;
        self.current = current;
        self.previous = previous;
        next
    }

    /// Drops the pending text: the next token starts at the current position.
    #[inline]
    pub fn ignore(&mut self) {
        self.token_start = self.pos;
    }

    /// Fills `token` with the pending text and appends it to the output.
    ///
    /// The token receives `text[token_start..pos]` and its [`Span`], then the
    /// next token starts at the current position. Emitting without consuming
    /// anything in between produces a token with empty text.
    pub fn emit(&mut self, mut token: T) {
        let span = self.pending_span();
        trace!(
            start = span.start,
            end = span.end,
            line = span.line,
            column = span.column,
            "emit"
        );

        token.set_text(self.pending().to_string());
        token.set_span(span);
        self.token_start = self.pos;

        self.tokens.push(token);
    }

    /// Returns the full input text.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte width recorded by the last `advance`.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the most recently decoded rune, `None` at end of input or
    /// before the first `advance`.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the rune decoded before [`current`](Lexer::current).
    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.previous
    }

    /// Returns the byte offset where the pending token starts.
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the text consumed since the last emit or ignore.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.text[self.token_start..self.pos]
    }

    /// Returns the text not consumed yet.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Returns true if every rune of the input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns the 1-based (line, column) of the current position.
    pub fn position(&self) -> (u32, u32) {
        self.lines.line_col(self.pos)
    }

    /// Returns the span the pending text would get if emitted now.
    pub fn pending_span(&self) -> Span {
        self.lines.span(self.token_start, self.pos)
    }

    /// Returns the tokens emitted so far.
    #[inline]
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Consumes the lexer and returns its tokens.
    pub fn into_tokens(self) -> Vec<T> {
        self.tokens
    }

    /// Returns the configuration the lexer was built with.
    #[inline]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Saves the current position, pending-token start and token count.
    pub fn snapshot(&self) -> LexerSnapshot {
        LexerSnapshot {
            pos: self.pos,
            width: self.width,
            current: self.current,
            previous: self.previous,
            token_start: self.token_start,
            token_count: self.tokens.len(),
        }
    }

    /// Returns to a snapshot taken earlier in this run.
    ///
    /// Tokens emitted after the snapshot are discarded.
    pub fn restore(&mut self, snapshot: LexerSnapshot) {
        debug_assert!(snapshot.pos <= self.text.len(), "snapshot from another input");
        self.pos = snapshot.pos;
        self.width = snapshot.width;
        self.current = snapshot.current;
        self.previous = snapshot.previous;
        self.token_start = snapshot.token_start;
        self.tokens.truncate(snapshot.token_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexer(text: &str) -> Lexer<'_> {
        Lexer::new(text)
    }

    fn texts(lexer: &Lexer<'_>) -> Vec<String> {
        lexer.tokens().iter().map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn test_new_lexer() {
        let l = lexer("abc");
        assert_eq!(l.pos(), 0);
        assert_eq!(l.token_start(), 0);
        assert_eq!(l.width(), 0);
        assert_eq!(l.current(), None);
        assert_eq!(l.previous(), None);
        assert!(l.tokens().is_empty());
    }

    #[test]
    fn test_advance() {
        let mut l = lexer("ab");
        assert_eq!(l.advance(), Some('a'));
        assert_eq!(l.pos(), 1);
        assert_eq!(l.advance(), Some('b'));
        assert_eq!(l.current(), Some('b'));
        assert_eq!(l.previous(), Some('a'));
        assert_eq!(l.pos(), 2);
    }

    #[test]
    fn test_advance_utf8_width() {
        let mut l = lexer("aé😀");
        l.advance();
        assert_eq!(l.width(), 1);
        assert_eq!(l.advance(), Some('é'));
        assert_eq!(l.width(), 2);
        assert_eq!(l.advance(), Some('😀'));
        assert_eq!(l.width(), 4);
        assert_eq!(l.pos(), 7);
    }

    #[test]
    fn test_advance_at_eof_is_zero_width() {
        let mut l = lexer("x");
        l.advance();
        assert_eq!(l.advance(), None);
        assert_eq!(l.width(), 0);
        assert_eq!(l.pos(), 1);
        assert_eq!(l.previous(), Some('x'));

        l.backtrack();
        assert_eq!(l.pos(), 1);
    }

    #[test]
    fn test_backtrack() {
        let mut l = lexer("αb");
        l.advance();
        l.backtrack();
        assert_eq!(l.pos(), 0);
        assert_eq!(l.advance(), Some('α'));
    }

    #[test]
    fn test_double_backtrack_is_single_step() {
        let mut l = lexer("abc");
        l.advance();
        l.advance();
        l.backtrack();
        l.backtrack();
        assert_eq!(l.pos(), 1);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut l = lexer("xy");
        assert_eq!(l.peek(), Some('x'));
        assert_eq!(l.peek(), Some('x'));
        assert_eq!(l.pos(), 0);
        l.advance();
        assert_eq!(l.peek(), Some('y'));
        assert_eq!(l.pos(), 1);
    }

    #[test]
    fn test_peek_leaves_state_untouched() {
        let mut l = lexer("abc");
        l.advance();
        l.advance();
        assert_eq!(l.peek(), Some('c'));
        assert_eq!(l.peek(), Some('c'));
        assert_eq!(l.current(), Some('b'));
        assert_eq!(l.previous(), Some('a'));
        assert_eq!(l.width(), 1);

        l.backtrack();
        assert_eq!(l.pos(), 1);
    }

    #[test]
    fn test_peek_at_eof() {
        let mut l = lexer("");
        assert_eq!(l.peek(), None);
        assert_eq!(l.pos(), 0);
    }

    #[test]
    fn test_emit_takes_pending_text() {
        let mut l = lexer("abc");
        l.advance();
        l.advance();
        assert_eq!(l.pending(), "ab");
        l.emit(TextToken::new());
        assert_eq!(l.token_start(), 2);
        assert_eq!(l.pending(), "");
        assert_eq!(texts(&l), ["ab"]);
    }

    #[test]
    fn test_ignore_then_emit_is_empty() {
        let mut l = lexer("abc");
        l.advance();
        l.ignore();
        l.emit(TextToken::new());
        assert_eq!(texts(&l), [""]);
    }

    #[test]
    fn test_consecutive_emits() {
        let mut l = lexer("ab");
        l.advance();
        l.emit(TextToken::new());
        l.emit(TextToken::new());
        assert_eq!(texts(&l), ["a", ""]);
    }

    #[test]
    fn test_emit_records_span() {
        let mut l = lexer("a\nbcd");
        l.advance();
        l.advance();
        l.ignore();
        l.advance();
        l.advance();
        l.emit(TextToken::new());
        assert_eq!(l.tokens()[0].span(), Span::new(2, 4, 2, 1));
        assert_eq!(l.position(), (2, 3));
    }

    #[test]
    fn test_remaining_and_eof() {
        let mut l = lexer("ab");
        assert_eq!(l.remaining(), "ab");
        assert!(!l.is_eof());
        l.advance();
        l.advance();
        assert_eq!(l.remaining(), "");
        assert!(l.is_eof());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut l = lexer("let x = 1");
        l.advance();
        let snapshot = l.snapshot();

        l.advance();
        l.advance();
        l.emit(TextToken::new());
        l.advance();
        assert_eq!(l.tokens().len(), 1);

        l.restore(snapshot);
        assert_eq!(l.pos(), 1);
        assert_eq!(snapshot.pos(), 1);
        assert_eq!(l.current(), Some('l'));
        assert_eq!(l.token_start(), 0);
        assert!(l.tokens().is_empty());
        assert_eq!(l.pending(), "l");
    }

    #[test]
    fn test_into_tokens() {
        let mut l = lexer("ab");
        l.advance();
        l.emit(TextToken::new());
        let tokens = l.into_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), "a");
    }
}
