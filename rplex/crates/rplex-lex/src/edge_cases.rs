//! Edge case tests for rplex-lex
