//! Rune sets for the accept family.
//!
//! Anything that can answer "is this rune a member?" can drive
//! [`Lexer::accept`](crate::Lexer::accept) and friends. A string is the set of
//! its characters, which keeps simple grammars short:
//!
//! ```
//! use rplex_lex::RuneSet;
//!
//! assert!("+-".contains_rune('-'));
//! assert!(('0'..='9').contains_rune('7'));
//! assert!(!'x'.contains_rune('y'));
//! ```

use std::ops::RangeInclusive;

/// A membership test over runes.
pub trait RuneSet {
    /// Returns true if `rune` belongs to the set.
    fn contains_rune(&self, rune: char) -> bool;
}

impl RuneSet for str {
    #[inline]
    fn contains_rune(&self, rune: char) -> bool {
        self.contains(rune)
    }
}

impl RuneSet for String {
    #[inline]
    fn contains_rune(&self, rune: char) -> bool {
        self.as_str().contains(rune)
    }
}

impl RuneSet for char {
    #[inline]
    fn contains_rune(&self, rune: char) -> bool {
        *self == rune
    }
}

impl RuneSet for [char] {
    #[inline]
    fn contains_rune(&self, rune: char) -> bool {
        self.contains(&rune)
    }
}

impl<const N: usize> RuneSet for [char; N] {
    #[inline]
    fn contains_rune(&self, rune: char) -> bool {
        self.contains(&rune)
    }
}

impl RuneSet for RangeInclusive<char> {
    #[inline]
    fn contains_rune(&self, rune: char) -> bool {
        self.contains(&rune)
    }
}

impl<S: RuneSet + ?Sized> RuneSet for &S {
    #[inline]
    fn contains_rune(&self, rune: char) -> bool {
        (**self).contains_rune(rune)
    }
}
