//! Grouping tokens into buckets keyed by an integer metric
//!
//! Buckets are kept in [IndexMap]s so that both the bucket order and the token order inside a
//! bucket reflect first-seen input order until a caller explicitly sorts them. Report order is
//! decided by [sort_by_key] with a [KeyOrder] (descending by default: longest words first).
//!
//! All functions here take the key function as a plain value, typically
//! [Metric::key_fn](crate::token::Metric::key_fn) or a closure.

use crate::term::Statistics;
use crate::token::{Key, Metric, Token, TokenId};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use textalyzer_config::OrderKind;

/// Ordered buckets of tokens.
pub type Groups = IndexMap<Key, Vec<Token>>;

/// Bucket ordering over integer keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyOrder {
    Ascending,
    #[default]
    Descending,
}

impl KeyOrder {
    pub fn compare(&self, a: &Key, b: &Key) -> Ordering {
        match self {
            KeyOrder::Ascending => a.cmp(b),
            KeyOrder::Descending => b.cmp(a),
        }
    }

    /// Parse `asc`/`ascending` or `desc`/`descending`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" | "ascending" => Some(KeyOrder::Ascending),
            "desc" | "descending" => Some(KeyOrder::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOrder::Ascending => f.write_str("ascending"),
            KeyOrder::Descending => f.write_str("descending"),
        }
    }
}

impl From<OrderKind> for KeyOrder {
    fn from(kind: OrderKind) -> Self {
        match kind {
            OrderKind::Ascending => KeyOrder::Ascending,
            OrderKind::Descending => KeyOrder::Descending,
        }
    }
}

/// Partition `tokens` by `key_fn`, keeping first-seen order of buckets and of tokens.
pub fn group_by_key<I, F>(tokens: I, key_fn: F) -> Groups
where
    I: IntoIterator<Item = Token>,
    F: Fn(&Token) -> Key,
{
    let mut groups = Groups::new();
    for token in tokens {
        groups.entry(key_fn(&token)).or_default().push(token);
    }
    groups
}

/// Reorder buckets by key. Keys are unique, so no further tie-break exists.
pub fn sort_by_key(groups: Groups, order: KeyOrder) -> Groups {
    sort_by_key_with(groups, |a, b| order.compare(a, b))
}

/// Reorder buckets with an arbitrary key comparator.
pub fn sort_by_key_with<C>(mut groups: Groups, comparator: C) -> Groups
where
    C: Fn(&Key, &Key) -> Ordering,
{
    groups.sort_by(|a, _, b, _| comparator(a, b));
    groups
}

/// Number of tokens per key, in first-seen key order.
pub fn count_by_key<'a, I, F>(tokens: I, key_fn: F) -> IndexMap<Key, usize>
where
    I: IntoIterator<Item = &'a Token>,
    F: Fn(&Token) -> Key,
{
    let mut counts = IndexMap::new();
    for token in tokens {
        *counts.entry(key_fn(token)).or_insert(0) += 1;
    }
    counts
}

/// Like [group_by_key] but each bucket is a set: tokens with equal values collapse into the
/// first occurrence.
pub fn unique_by_key<I, F>(tokens: I, key_fn: F) -> IndexMap<Key, IndexSet<Token>>
where
    I: IntoIterator<Item = Token>,
    F: Fn(&Token) -> Key,
{
    let mut groups: IndexMap<Key, IndexSet<Token>> = IndexMap::new();
    for token in tokens {
        groups.entry(key_fn(&token)).or_default().insert(token);
    }
    groups
}

/// Index tokens by identity.
pub fn map_by_id<'a, I>(tokens: I) -> HashMap<TokenId, Token>
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .map(|token| (token.id(), token.clone()))
        .collect()
}

/// For each distinct token value, the metric summed over all its occurrences.
pub fn sum_by_value<'a, I>(tokens: I, metric: Metric) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut sums = IndexMap::new();
    for token in tokens {
        *sums.entry(token.value().to_string()).or_insert(0) += metric.measure(token);
    }
    sums
}

/// Summary statistics of `metric` per key, keys ascending.
pub fn statistics_by_key<'a, I, F>(tokens: I, key_fn: F, metric: Metric) -> BTreeMap<Key, Statistics>
where
    I: IntoIterator<Item = &'a Token>,
    F: Fn(&Token) -> Key,
{
    let mut stats: BTreeMap<Key, Statistics> = BTreeMap::new();
    for token in tokens {
        stats
            .entry(key_fn(token))
            .or_default()
            .accept(metric.measure(token));
    }
    stats
}
