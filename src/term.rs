//! Aggregation buckets ("terms") and their statistics
//!
//! A term collects every token that classified to one key. Terms are built in two phases:
//! [TermBuilder] accumulates tokens (the only mutation path), then [TermBuilder::freeze]
//! produces an immutable [Term] on which statistics and symbol sets are computed.

pub mod builder;
pub mod statistics;

pub use builder::{build_term, build_terms, TermBuilder};
pub use statistics::Statistics;

use crate::token::{Key, Metric, SymbolClass, Token};
use std::collections::BTreeSet;

/// A frozen bucket of tokens sharing one key.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    key: Key,
    tokens: Vec<Token>,
}

impl Term {
    pub fn key(&self) -> Key {
        self.key
    }

    /// Tokens in the order they were assigned to this bucket.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Min/max/count/sum of `metric` across the tokens.
    pub fn statistics(&self, metric: Metric) -> Statistics {
        self.tokens
            .iter()
            .map(|token| metric.measure(token))
            .collect()
    }

    /// Union of every token's symbol set.
    pub fn unique_symbols(&self, class: SymbolClass) -> BTreeSet<char> {
        self.tokens
            .iter()
            .flat_map(|token| class.symbols(token))
            .collect()
    }

    /// Sum of `metric` divided by the token count; `None` for an empty term.
    pub fn average_per_token(&self, metric: Metric) -> Option<f64> {
        self.statistics(metric).average()
    }
}
