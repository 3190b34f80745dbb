//! Token value type

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Characters counted as vowels, compared case-insensitively.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

static NEXT_TOKEN_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque per-process token identity. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TokenId(u64);

impl TokenId {
    fn next() -> Self {
        TokenId(NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tok-{}", self.0)
    }
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// A single classified word.
///
/// The value is stored verbatim (as produced by the token filter) and never changes.
#[derive(Debug, Clone)]
pub struct Token {
    id: TokenId,
    value: String,
}

impl Token {
    /// Create a token with a fresh id. Accepts any string, including the empty one.
    pub fn new(value: impl Into<String>) -> Self {
        Token {
            id: TokenId::next(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Character count of the value.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True when both handles refer to the same constructed token.
    pub fn same_instance(&self, other: &Token) -> bool {
        self.id == other.id
    }

    /// The vowel subsequence of the value, in original order and case, repeats kept.
    pub fn vowels(&self) -> String {
        self.value.chars().filter(|c| is_vowel(*c)).collect()
    }

    /// Number of vowel characters, repeats included.
    pub fn vowel_count(&self) -> usize {
        self.value.chars().filter(|c| is_vowel(*c)).count()
    }

    /// Distinct vowels, folded to lowercase.
    pub fn vowel_set(&self) -> BTreeSet<char> {
        self.value
            .chars()
            .filter(|c| is_vowel(*c))
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// Distinct vowels joined in ascending order, e.g. `"ae"` for `"banana tree"`.
    pub fn distinct_vowel_string(&self) -> String {
        self.vowel_set().into_iter().collect()
    }

    /// Every distinct character of the value, as stored.
    pub fn character_set(&self) -> BTreeSet<char> {
        self.value.chars().collect()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
