//! Runs an [AnalyzerConfig] over a sequence of lines

use super::config::AnalyzerConfig;
use crate::grouping::{self, Groups};
use crate::lexing::Tokenizer;
use crate::report::Report;
use crate::term::{build_terms, Term};
use crate::token::{Key, Token};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

/// Single-pass, single-threaded analysis over lines of text.
///
/// Lines are consumed lazily, but grouping needs every token before any bucket is final, so
/// the grouped operations materialize all tokens of the input.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let tokenizer = Tokenizer::new(config.delimiter.clone());
        Analyzer { config, tokenizer }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Filtered word strings, lazily, blanks discarded.
    pub fn words<'a, I>(&'a self, lines: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
    {
        let filter = self.config.filter;
        self.tokenizer.tokenize(lines).filter_map(move |raw| {
            let cleaned = filter.apply(&raw);
            if cleaned.is_none() {
                trace!(raw = %raw, "discarded blank word");
            }
            cleaned
        })
    }

    /// Tokens in input order.
    pub fn tokens<I>(&self, lines: I) -> Vec<Token>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tokens: Vec<Token> = self.words(lines).map(Token::new).collect();
        debug!(tokens = tokens.len(), "tokenized input");
        tokens
    }

    /// Buckets in first-seen order.
    pub fn groups<I>(&self, lines: I) -> Groups
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let key = self.config.key;
        let groups = grouping::group_by_key(self.tokens(lines), |token| key.key(token));
        debug!(buckets = groups.len(), "grouped tokens");
        groups
    }

    /// Buckets in the configured key order.
    pub fn sorted_groups<I>(&self, lines: I) -> Groups
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        grouping::sort_by_key(self.groups(lines), self.config.order)
    }

    /// Token count per key, in the configured key order.
    pub fn counts<I>(&self, lines: I) -> IndexMap<Key, usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let key = self.config.key;
        let order = self.config.order;
        let mut counts = grouping::count_by_key(&self.tokens(lines), |token| key.key(token));
        counts.sort_by(|a, _, b, _| order.compare(a, b));
        counts
    }

    /// Value-deduplicated buckets, in the configured key order.
    pub fn unique_groups<I>(&self, lines: I) -> IndexMap<Key, IndexSet<Token>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let key = self.config.key;
        let order = self.config.order;
        let mut groups = grouping::unique_by_key(self.tokens(lines), |token| key.key(token));
        groups.sort_by(|a, _, b, _| order.compare(a, b));
        groups
    }

    /// One frozen term per bucket, in the configured key order.
    pub fn terms<I>(&self, lines: I) -> Vec<Term>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        build_terms(self.sorted_groups(lines))
    }

    pub fn report<I>(&self, lines: I) -> Report
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let report = Report::new(self.terms(lines), self.config.property, self.config.symbols);
        debug!(
            terms = report.len(),
            tokens = report.token_count(),
            property = %report.property(),
            "built report"
        );
        report
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
