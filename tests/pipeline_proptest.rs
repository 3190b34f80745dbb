//! Property-based tests for the analysis pipeline
//!
//! These tests check the structural guarantees of grouping and aggregation on generated text:
//! 1. Buckets partition the token sequence (nothing lost, nothing duplicated)
//! 2. Bucket symbol sets do not depend on token order
//! 3. Every rendered line parses back to its bucket's key and symbols, for vowel and
//!    character symbol classes alike

use proptest::prelude::*;
use textalyzer::formats::{parse_term_line, LineFormatter};
use textalyzer::grouping::{group_by_key, KeyOrder};
use textalyzer::lexing::{Delimiter, TokenFilter};
use textalyzer::pipeline::{Analyzer, AnalyzerConfig, ConfigRegistry};
use textalyzer::term::build_term;
use textalyzer::token::{Metric, SymbolClass, Token};

fn line_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9,.;!? '\"-]{0,60}", 0..8)
}

proptest! {
    #[test]
    fn buckets_partition_tokens(lines in line_strategy()) {
        let analyzer = Analyzer::default();
        let tokens = analyzer.tokens(&lines);
        let groups = analyzer.groups(&lines);

        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, tokens.len());
        for (key, bucket) in &groups {
            prop_assert!(!bucket.is_empty());
            prop_assert!(bucket.iter().all(|token| token.len() == *key));
        }
    }

    #[test]
    fn token_count_matches_non_blank_filtered_words(lines in line_strategy()) {
        let analyzer = Analyzer::default();
        let filter = TokenFilter::alphabetic();
        let expected = lines
            .iter()
            .flat_map(|line| line.split_whitespace())
            .filter(|word| !filter.rewrite(word).trim().is_empty())
            .count();
        prop_assert_eq!(analyzer.tokens(&lines).len(), expected);
    }

    #[test]
    fn sorted_buckets_follow_order(lines in line_strategy(), ascending in any::<bool>()) {
        let order = if ascending { KeyOrder::Ascending } else { KeyOrder::Descending };
        let analyzer = Analyzer::new(AnalyzerConfig::vowels().with_order(order));
        let keys: Vec<_> = analyzer.sorted_groups(&lines).keys().copied().collect();
        for pair in keys.windows(2) {
            prop_assert!(order.compare(&pair[0], &pair[1]).is_lt());
        }
    }

    #[test]
    fn unique_symbols_ignore_token_order(
        words in prop::collection::vec("[a-zA-Z]{1,10}", 1..12),
        seed in any::<u64>(),
    ) {
        let tokens: Vec<Token> = words.iter().map(|w| Token::new(w.as_str())).collect();
        let mut shuffled = tokens.clone();
        // deterministic rotation plus reversal
        let shift = (seed as usize) % shuffled.len();
        shuffled.rotate_left(shift);
        shuffled.reverse();

        let original = build_term(1, tokens);
        let permuted = build_term(1, shuffled);
        prop_assert_eq!(
            original.unique_symbols(SymbolClass::Vowels),
            permuted.unique_symbols(SymbolClass::Vowels)
        );
        prop_assert_eq!(
            original.average_per_token(Metric::VowelCount),
            permuted.average_per_token(Metric::VowelCount)
        );
    }

    #[test]
    fn rendered_lines_parse_back(lines in line_strategy()) {
        let analyzer = Analyzer::default();
        let report = analyzer.report(&lines);
        let rendered = LineFormatter::default().lines(&report);
        prop_assert_eq!(rendered.len(), report.len());

        for (line, term) in rendered.iter().zip(report.terms()) {
            let parsed = parse_term_line(line).expect("rendered line parses");
            prop_assert_eq!(parsed.key, term.key());
            let symbols: Vec<char> = term.unique_symbols(SymbolClass::Vowels).into_iter().collect();
            prop_assert_eq!(parsed.symbols, symbols);
        }
    }

    #[test]
    fn lexical_lines_parse_back(lines in line_strategy()) {
        let config = ConfigRegistry::with_defaults()
            .resolve("lexical")
            .expect("lexical preset");
        let report = Analyzer::new(config).report(&lines);

        for (line, term) in LineFormatter::default().lines(&report).iter().zip(report.terms()) {
            let parsed = parse_term_line(line).expect("rendered line parses");
            prop_assert_eq!(parsed.key, term.key());
            let symbols: Vec<char> = term.unique_symbols(SymbolClass::Characters).into_iter().collect();
            prop_assert_eq!(parsed.symbols, symbols);
        }
    }

    #[test]
    fn comma_delimited_lines_parse_back(
        lines in prop::collection::vec("[a-z {},]{0,40}", 0..6),
    ) {
        let config = AnalyzerConfig::vowels()
            .with_delimiter(Delimiter::new(",+").expect("valid delimiter"))
            .with_filter(TokenFilter::standard())
            .with_property(Metric::Length)
            .with_symbols(SymbolClass::Characters);
        let report = Analyzer::new(config).report(&lines);

        for (line, term) in LineFormatter::default().lines(&report).iter().zip(report.terms()) {
            let parsed = parse_term_line(line).expect("rendered line parses");
            prop_assert_eq!(parsed.key, term.key());
            prop_assert_eq!(parsed.symbols.len(), term.unique_symbols(SymbolClass::Characters).len());
        }
    }

    #[test]
    fn grouping_is_stable_within_bucket(words in prop::collection::vec("[a-z]{1,5}", 0..30)) {
        let tokens: Vec<Token> = words.iter().map(|w| Token::new(w.as_str())).collect();
        let groups = group_by_key(tokens.clone(), Metric::Length.key_fn());
        for (key, bucket) in &groups {
            let expected: Vec<&str> = tokens
                .iter()
                .filter(|token| token.len() == *key)
                .map(Token::value)
                .collect();
            let actual: Vec<&str> = bucket.iter().map(Token::value).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
