//! Delimiter-based line splitting

use super::LexingError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// One or more whitespace characters.
pub const WHITESPACE_PATTERN: &str = r"\s+";

/// Whitespace plus `, . / ? ; : ! -` and double quotes.
pub const STRICT_PATTERN: &str = r#"[,./?;:!\-"\s]+"#;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(WHITESPACE_PATTERN).expect("whitespace delimiter is valid"));

static STRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(STRICT_PATTERN).expect("strict delimiter is valid"));

/// A compiled delimiter pattern. Lines are split on maximal runs of it.
#[derive(Clone)]
pub struct Delimiter {
    regex: Regex,
}

impl Delimiter {
    /// Compile a caller-supplied pattern.
    ///
    /// Patterns that match the empty string are rejected, since splitting on them would
    /// tear every word into single characters.
    pub fn new(pattern: &str) -> Result<Self, LexingError> {
        let regex = Regex::new(pattern).map_err(|e| LexingError::InvalidDelimiter {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        if regex.is_match("") {
            return Err(LexingError::EmptyMatch(pattern.to_string()));
        }
        Ok(Delimiter { regex })
    }

    /// Split on whitespace runs (the default).
    pub fn whitespace() -> Self {
        Delimiter {
            regex: WHITESPACE.clone(),
        }
    }

    /// Split on whitespace and common punctuation.
    pub fn strict() -> Self {
        Delimiter {
            regex: STRICT.clone(),
        }
    }

    /// Resolve a configuration value: `whitespace`, `strict`, or a literal pattern.
    pub fn from_setting(setting: &str) -> Result<Self, LexingError> {
        match setting {
            "whitespace" => Ok(Self::whitespace()),
            "strict" => Ok(Self::strict()),
            pattern => Self::new(pattern),
        }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Split one line: trim it, then cut on maximal delimiter runs.
    ///
    /// A delimiter run at the very start of a trimmed line (possible with punctuation
    /// delimiters) would produce an empty first segment; empty segments are skipped.
    pub fn split<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .split(line.trim())
            .filter(|segment| !segment.is_empty())
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::whitespace()
    }
}

impl fmt::Debug for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Delimiter").field(&self.pattern()).finish()
    }
}

impl PartialEq for Delimiter {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

/// Splits a sequence of lines into one flat sequence of raw substrings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenizer {
    delimiter: Delimiter,
}

impl Tokenizer {
    pub fn new(delimiter: Delimiter) -> Self {
        Tokenizer { delimiter }
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Lazily tokenize `lines`, in line order then split order.
    ///
    /// Lines are pulled one at a time, so a forward-only source is never buffered whole.
    pub fn tokenize<'a, I>(&'a self, lines: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
    {
        lines.into_iter().flat_map(move |line| {
            self.delimiter
                .split(line.as_ref())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn split_all(tokenizer: &Tokenizer, lines: &[&str]) -> Vec<String> {
        tokenizer.tokenize(lines.iter().copied()).collect()
    }

    #[test]
    fn test_whitespace_split() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            split_all(&tokenizer, &["  Base   test\tsimple  "]),
            vec!["Base", "test", "simple"]
        );
    }

    #[test]
    fn test_lines_are_flattened_in_order() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            split_all(&tokenizer, &["one two", "", "three"]),
            vec!["one", "two", "three"]
        );
    }

    #[rstest]
    #[case("")]
    #[case("    ")]
    #[case("\t \t")]
    fn test_blank_lines_yield_nothing(#[case] line: &str) {
        let tokenizer = Tokenizer::default();
        assert!(split_all(&tokenizer, &[line]).is_empty());
    }

    #[test]
    fn test_whitespace_keeps_punctuation() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            split_all(&tokenizer, &["Hello, world!"]),
            vec!["Hello,", "world!"]
        );
    }

    #[test]
    fn test_strict_split_on_punctuation() {
        let tokenizer = Tokenizer::new(Delimiter::strict());
        assert_eq!(
            split_all(&tokenizer, &[r#""Well-known", he said; ok?"#]),
            vec!["Well", "known", "he", "said", "ok"]
        );
    }

    #[test]
    fn test_strict_line_of_only_delimiters() {
        let tokenizer = Tokenizer::new(Delimiter::strict());
        assert!(split_all(&tokenizer, &["-- ?! ..."]).is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let delimiter = Delimiter::new("[|;]+").expect("valid pattern");
        let tokenizer = Tokenizer::new(delimiter);
        assert_eq!(split_all(&tokenizer, &["a|b;;c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_delimiter_is_rejected() {
        assert!(matches!(
            Delimiter::new("[unclosed"),
            Err(LexingError::InvalidDelimiter { .. })
        ));
        assert!(matches!(
            Delimiter::new("x*"),
            Err(LexingError::EmptyMatch(_))
        ));
    }

    #[rstest]
    #[case("whitespace", WHITESPACE_PATTERN)]
    #[case("strict", STRICT_PATTERN)]
    #[case(",+", ",+")]
    fn test_from_setting(#[case] setting: &str, #[case] pattern: &str) {
        let delimiter = Delimiter::from_setting(setting).expect("valid setting");
        assert_eq!(delimiter.pattern(), pattern);
    }
}
