//! Per-word cleanup applied between splitting and token construction

use std::fmt;

/// A pure rewrite of each raw substring, followed by a blank-discard rule.
#[derive(Clone, Copy)]
pub enum TokenFilter {
    /// Trim, and lowercase when `lowercase` is set.
    Standard { lowercase: bool },
    /// Drop every character outside `[a-zA-Z]`, then lowercase (when set) and trim.
    Alphabetic { lowercase: bool },
    /// Any caller-supplied plain function.
    Custom(fn(&str) -> String),
}

impl TokenFilter {
    pub fn standard() -> Self {
        TokenFilter::Standard { lowercase: true }
    }

    pub fn alphabetic() -> Self {
        TokenFilter::Alphabetic { lowercase: true }
    }

    /// Same filter with case folding switched on or off. Custom filters are returned as is.
    pub fn with_lowercase(self, lowercase: bool) -> Self {
        match self {
            TokenFilter::Standard { .. } => TokenFilter::Standard { lowercase },
            TokenFilter::Alphabetic { .. } => TokenFilter::Alphabetic { lowercase },
            custom => custom,
        }
    }

    /// Rewrite without the discard rule.
    pub fn rewrite(&self, raw: &str) -> String {
        match self {
            TokenFilter::Standard { lowercase } => fold(raw.trim(), *lowercase),
            TokenFilter::Alphabetic { lowercase } => {
                let letters: String = raw.chars().filter(char::is_ascii_alphabetic).collect();
                fold(&letters, *lowercase)
            }
            TokenFilter::Custom(f) => f(raw),
        }
    }

    /// Rewrite `raw`; `None` when the result is empty or whitespace only.
    pub fn apply(&self, raw: &str) -> Option<String> {
        let cleaned = self.rewrite(raw);
        if cleaned.trim().is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

fn fold(text: &str, lowercase: bool) -> String {
    if lowercase {
        text.to_lowercase().trim().to_string()
    } else {
        text.trim().to_string()
    }
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for TokenFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenFilter::Standard { lowercase } => f
                .debug_struct("Standard")
                .field("lowercase", lowercase)
                .finish(),
            TokenFilter::Alphabetic { lowercase } => f
                .debug_struct("Alphabetic")
                .field("lowercase", lowercase)
                .finish(),
            TokenFilter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
