//! Splitting raw lines into candidate words and cleaning them up
//!
//! Lexing happens in two steps:
//!
//! 1. [Tokenizer] trims every line and splits it on maximal runs of a [Delimiter] pattern,
//!    flattening all lines into one sequence of raw substrings.
//! 2. [TokenFilter] rewrites each raw substring (trim, lowercase, optionally strip
//!    non-letters) and discards blank results.
//!
//! Both steps are total: no text input makes them fail, it only yields fewer words.
//! The only fallible operation is compiling a caller-supplied delimiter pattern.

pub mod filter;
pub mod tokenizer;

pub use filter::TokenFilter;
pub use tokenizer::{Delimiter, Tokenizer, STRICT_PATTERN, WHITESPACE_PATTERN};

use thiserror::Error;

/// Errors raised while configuring the lexing stage
#[derive(Debug, Clone, Error)]
pub enum LexingError {
    /// The delimiter pattern is not a valid regular expression
    #[error("Invalid delimiter pattern '{pattern}': {message}")]
    InvalidDelimiter { pattern: String, message: String },
    /// The delimiter pattern matches the empty string, so it cannot split anything
    #[error("Delimiter pattern '{0}' matches the empty string")]
    EmptyMatch(String),
}
