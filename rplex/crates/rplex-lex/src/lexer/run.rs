//! State functions and the trampoline runner.
//!
//! A lexer written against this engine is a chain of small steps. Each step
//! gets the [`Lexer`], scans a little, and hands back the step to run next,
//! or `None` when lexing is done. The runner calls steps in a loop, so the
//! stack stays flat however many steps the grammar chains together.

use std::fmt;

use rplex_util::{LexError, LexResult};
use tracing::{debug, warn};

use crate::lexer::Lexer;
use crate::token::Token;

/// Signature of a state function that needs no captured state.
pub type StateFn<'a, T> = fn(&mut Lexer<'a, T>) -> Option<LexFn<'a, T>>;

type BoxedStateFn<'a, T> = Box<dyn FnOnce(&mut Lexer<'a, T>) -> Option<LexFn<'a, T>> + 'a>;

/// The next step of a lexer.
///
/// Plain functions are stored as function pointers. Closures are boxed and
/// may capture whatever auxiliary state the grammar needs (nesting depth, the
/// quote that opened a string, ...); the engine never looks at it.
///
/// # Example
///
/// ```
/// use rplex_lex::{LexFn, Lexer, TextToken};
///
/// fn lex_digits<'a>(l: &mut Lexer<'a>) -> Option<LexFn<'a>> {
///     l.accept_run('0'..='9');
///     l.emit(TextToken::new());
///     None
/// }
///
/// let close = ')';
/// let start: LexFn<'_> = LexFn::new(move |l| {
///     l.accept('(');
///     l.ignore();
///     let next = LexFn::from_fn(lex_digits);
///     if l.peek() == Some(close) { None } else { Some(next) }
/// });
///
/// let mut lexer: Lexer<'_> = Lexer::new("(42)");
/// let tokens = lexer.run(start);
/// assert_eq!(tokens[0].text(), "42");
/// ```
pub struct LexFn<'a, T = crate::TextToken> {
    step: Step<'a, T>,
}

enum Step<'a, T> {
    Plain(StateFn<'a, T>),
    Boxed(BoxedStateFn<'a, T>),
}

impl<'a, T: Token> LexFn<'a, T> {
    /// Wraps a closure as a state function.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut Lexer<'a, T>) -> Option<LexFn<'a, T>> + 'a,
    {
        Self {
            step: Step::Boxed(Box::new(f)),
        }
    }

    /// Wraps a plain function as a state function, without allocating.
    pub fn from_fn(f: StateFn<'a, T>) -> Self {
        Self {
            step: Step::Plain(f),
        }
    }

    /// Runs this step once and returns the next one.
    #[inline]
    pub fn call(self, lexer: &mut Lexer<'a, T>) -> Option<LexFn<'a, T>> {
        match self.step {
            Step::Plain(f) => f(lexer),
            Step::Boxed(f) => f(lexer),
        }
    }
}

impl<'a, T: Token> From<StateFn<'a, T>> for LexFn<'a, T> {
    fn from(f: StateFn<'a, T>) -> Self {
        Self::from_fn(f)
    }
}

impl<T> fmt::Debug for LexFn<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            Step::Plain(_) => f.write_str("LexFn(fn)"),
            Step::Boxed(_) => f.write_str("LexFn(closure)"),
        }
    }
}

impl<'a, T: Token> Lexer<'a, T> {
    /// Runs state functions from `initial` until one returns `None`.
    ///
    /// Returns every token emitted so far. The configured step limit is not
    /// consulted; see [`try_run`](Lexer::try_run).
    pub fn run(&mut self, initial: LexFn<'a, T>) -> &[T] {
        debug!(len = self.text().len(), "lexer run started");

        let mut steps = 0usize;
        let mut next = Some(initial);
        while let Some(step) = next {
            next = step.call(self);
            steps += 1;
        }

        debug!(
            steps,
            tokens = self.tokens().len(),
            pos = self.pos(),
            "lexer run finished"
        );
        self.tokens()
    }

    /// Like [`run`](Lexer::run), but stops with an error once the step limit
    /// from the configuration is exceeded.
    ///
    /// Tokens emitted before the limit was hit stay available through
    /// [`tokens`](Lexer::tokens). Without a configured limit this behaves
    /// exactly like `run`.
    pub fn try_run(&mut self, initial: LexFn<'a, T>) -> LexResult<&[T]> {
        let limit = self.config().step_limit;
        debug!(len = self.text().len(), ?limit, "lexer run started");

        let mut steps = 0usize;
        let mut next = Some(initial);
        while let Some(step) = next {
            if let Some(limit) = limit {
                if steps >= limit {
                    warn!(limit, pos = self.pos(), "lexer step limit exceeded");
                    return Err(LexError::StepLimitExceeded {
                        limit,
                        pos: self.pos(),
                    });
                }
            }
            next = step.call(self);
            steps += 1;
        }

        debug!(
            steps,
            tokens = self.tokens().len(),
            pos = self.pos(),
            "lexer run finished"
        );
        Ok(self.tokens())
    }
}
