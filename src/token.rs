//! Classified word tokens and the integer metrics derived from them.
//!
//!     A token wraps the filtered text of one word. Everything else about it (length, vowel
//!     content, character set) is derived on demand from that text, so a token never carries
//!     state that could drift from its value.
//!
//! Identity and Equality
//!
//!     Every token receives a fresh [TokenId] when constructed. The id is the token's identity:
//!     it keys per-token maps and distinguishes two occurrences of the same word. Equality and
//!     hashing, on the other hand, compare the stored value only, which is what deduplication
//!     (see [unique_by_key](crate::grouping::unique_by_key)) relies on. Use
//!     [Token::same_instance] when identity is what you mean.
//!
//! Metrics
//!
//!     [Metric] selects the integer property that drives grouping and aggregation (character
//!     length, vowel count, distinct vowels). [SymbolClass] selects which characters a bucket
//!     collects into its unique symbol set.

pub mod core;
pub mod metric;

pub use core::{Token, TokenId, VOWELS};
pub use metric::{Key, Metric, SymbolClass};
