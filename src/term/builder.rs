//! Mutable accumulation phase of a term

use super::Term;
use crate::grouping::Groups;
use crate::token::{Key, Token};

/// Accumulates tokens for one key until [TermBuilder::freeze].
///
/// Absent inputs are tolerated: pushing `None`, removing a token that is not present, or
/// resetting from `None` all leave the builder in a valid state instead of failing.
#[derive(Debug, Clone)]
pub struct TermBuilder {
    key: Key,
    tokens: Vec<Token>,
}

impl TermBuilder {
    pub fn new(key: Key) -> Self {
        TermBuilder {
            key,
            tokens: Vec::new(),
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append at the end, preserving insertion order.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Append when present; `None` is a no-op.
    pub fn push_opt(&mut self, token: Option<Token>) -> &mut Self {
        if let Some(token) = token {
            self.tokens.push(token);
        }
        self
    }

    pub fn extend<I: IntoIterator<Item = Token>>(&mut self, tokens: I) -> &mut Self {
        self.tokens.extend(tokens);
        self
    }

    /// Remove the given token instance (matched by id, not by value). Returns whether
    /// anything was removed.
    pub fn remove(&mut self, token: &Token) -> bool {
        match self.tokens.iter().position(|t| t.same_instance(token)) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the contents. `None` clears the builder.
    pub fn set_tokens<I: IntoIterator<Item = Token>>(&mut self, tokens: Option<I>) -> &mut Self {
        self.tokens.clear();
        if let Some(tokens) = tokens {
            self.tokens.extend(tokens);
        }
        self
    }

    pub fn freeze(self) -> Term {
        Term {
            key: self.key,
            tokens: self.tokens,
        }
    }
}

/// Build a frozen term from tokens in the supplied order.
pub fn build_term<I: IntoIterator<Item = Token>>(key: Key, tokens: I) -> Term {
    let mut builder = TermBuilder::new(key);
    builder.extend(tokens);
    builder.freeze()
}

/// One term per bucket, in bucket order.
pub fn build_terms(groups: Groups) -> Vec<Term> {
    groups
        .into_iter()
        .map(|(key, tokens)| build_term(key, tokens))
        .collect()
}
