//! Shared fixtures for the rplex-lex integration tests.
//!
//! Provides a tracing subscriber for test output and a small INI-style
//! grammar written against the public API only.

#![allow(dead_code)]

use rplex_lex::{LexFn, Lexer, Span, TextToken, Token};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; later calls are no-ops.
///
/// Set `RUST_LOG=rplex_lex=trace` to see every emit.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Kinds produced by the INI grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Section,
    Key,
    Str,
    Number,
    Bare,
    Error,
}

/// A kinded token built on top of the engine's default token.
#[derive(Clone, Debug)]
pub struct IniToken {
    pub kind: Kind,
    inner: TextToken,
}

impl IniToken {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            inner: TextToken::new(),
        }
    }

    pub fn span(&self) -> Span {
        self.inner.span()
    }
}

impl Token for IniToken {
    fn set_text(&mut self, text: String) {
        self.inner.set_text(text);
    }

    fn text(&self) -> &str {
        self.inner.text()
    }

    fn set_span(&mut self, span: Span) {
        self.inner.set_span(span);
    }
}

pub type IniLexer<'a> = Lexer<'a, IniToken>;

fn is_key_rune(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Entry state: skips blank space between lines and dispatches on the
/// first rune of the next line.
pub fn lex_line<'a>(l: &mut IniLexer<'a>) -> Option<LexFn<'a, IniToken>> {
    l.accept_run_func(char::is_whitespace);
    l.ignore();

    match l.peek()? {
        '[' => Some(LexFn::from_fn(lex_section)),
        '#' | ';' => Some(LexFn::from_fn(lex_comment)),
        _ => Some(LexFn::from_fn(lex_key)),
    }
}

fn lex_section<'a>(l: &mut IniLexer<'a>) -> Option<LexFn<'a, IniToken>> {
    l.accept('[');
    l.ignore();
    l.accept_until("]\n");
    if l.peek() == Some(']') {
        l.emit(IniToken::new(Kind::Section));
        l.accept(']');
        l.ignore();
    } else {
        l.emit(IniToken::new(Kind::Error));
    }
    Some(LexFn::from_fn(lex_line))
}

fn lex_comment<'a>(l: &mut IniLexer<'a>) -> Option<LexFn<'a, IniToken>> {
    l.accept_until('\n');
    l.ignore();
    Some(LexFn::from_fn(lex_line))
}

fn lex_key<'a>(l: &mut IniLexer<'a>) -> Option<LexFn<'a, IniToken>> {
    if l.accept_run_func(is_key_rune) == 0 {
        l.accept_until('\n');
        l.emit(IniToken::new(Kind::Error));
        return Some(LexFn::from_fn(lex_line));
    }
    l.emit(IniToken::new(Kind::Key));

    l.accept_run(" \t");
    l.ignore();
    if !l.accept('=') {
        l.accept_until('\n');
        l.emit(IniToken::new(Kind::Error));
        return Some(LexFn::from_fn(lex_line));
    }
    l.accept_run(" \t");
    l.ignore();
    Some(LexFn::from_fn(lex_value))
}

fn lex_value<'a>(l: &mut IniLexer<'a>) -> Option<LexFn<'a, IniToken>> {
    if l.accept('"') {
        l.ignore();
        l.accept_until_unescaped("\"\n");
        if l.peek() == Some('"') {
            l.emit(IniToken::new(Kind::Str));
            l.accept('"');
            l.ignore();
        } else {
            l.emit(IniToken::new(Kind::Error));
        }
        return Some(LexFn::from_fn(lex_line));
    }

    l.accept_run('0'..='9');
    if !l.pending().is_empty() && matches!(l.peek(), None | Some('\n')) {
        l.emit(IniToken::new(Kind::Number));
    } else {
        l.accept_until('\n');
        l.emit(IniToken::new(Kind::Bare));
    }
    Some(LexFn::from_fn(lex_line))
}

/// Lex `source` with the INI grammar and return (kind, text) pairs.
pub fn lex_ini(source: &str) -> Vec<(Kind, String)> {
    let mut lexer: IniLexer<'_> = Lexer::new(source);
    lexer
        .run(LexFn::from_fn(lex_line))
        .iter()
        .map(|t| (t.kind, t.text().to_string()))
        .collect()
}
