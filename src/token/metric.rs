//! Integer properties of tokens used for grouping and aggregation

use super::core::Token;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use textalyzer_config::{MetricKind, SymbolKind};

/// Bucket key produced by a key function.
pub type Key = usize;

/// A derived integer property of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Character count
    Length,
    /// Vowels including repeats
    VowelCount,
    /// Distinct vowels (case-folded)
    DistinctVowels,
}

impl Metric {
    pub fn measure(&self, token: &Token) -> usize {
        match self {
            Metric::Length => token.len(),
            Metric::VowelCount => token.vowel_count(),
            Metric::DistinctVowels => token.vowel_set().len(),
        }
    }

    /// The metric as a plain key function.
    pub fn key_fn(&self) -> fn(&Token) -> Key {
        match self {
            Metric::Length => |token: &Token| token.len(),
            Metric::VowelCount => |token: &Token| token.vowel_count(),
            Metric::DistinctVowels => |token: &Token| token.vowel_set().len(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Length => "length",
            Metric::VowelCount => "vowel-count",
            Metric::DistinctVowels => "distinct-vowels",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<MetricKind> for Metric {
    fn from(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Length => Metric::Length,
            MetricKind::VowelCount => Metric::VowelCount,
            MetricKind::DistinctVowels => Metric::DistinctVowels,
        }
    }
}

/// Which characters of a token count as its symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolClass {
    #[default]
    Vowels,
    Characters,
}

impl SymbolClass {
    pub fn symbols(&self, token: &Token) -> BTreeSet<char> {
        match self {
            SymbolClass::Vowels => token.vowel_set(),
            SymbolClass::Characters => token.character_set(),
        }
    }
}

impl From<SymbolKind> for SymbolClass {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Vowels => SymbolClass::Vowels,
            SymbolKind::Characters => SymbolClass::Characters,
        }
    }
}
