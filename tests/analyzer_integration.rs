//! Integration tests for the analyzer
//!
//! These tests run whole documents through the public API:
//! 1. Reference inputs produce the expected buckets and report lines
//! 2. Configuration files and presets drive the same pipeline
//! 3. Reports survive a write/read cycle on disk

use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use textalyzer::formats::{FormatRegistry, LineFormatter, NumberFormat};
use textalyzer::grouping::{self, KeyOrder};
use textalyzer::loader::{DocumentLoader, ReportWriter};
use textalyzer::pipeline::{Analyzer, AnalyzerConfig, ConfigRegistry};
use textalyzer::token::Metric;
use textalyzer_config::Loader;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[rstest]
#[case("asffsa sadfas fsad asdffsda ", 3)]
#[case("", 0)]
#[case("Base test", 1)]
#[case("Base test simple string", 2)]
#[case("   \t  ", 0)]
#[case("1234 -- !!", 0)]
fn test_bucket_count(#[case] line: &str, #[case] buckets: usize) {
    let analyzer = Analyzer::default();
    assert_eq!(analyzer.groups([line]).len(), buckets);
}

#[test]
fn test_reference_input_highest_bucket() {
    let analyzer = Analyzer::default();
    let report = analyzer.report(["asffsa sadfas fsad asdffsda "]);

    let compact = LineFormatter::new(NumberFormat::from_pattern("#.##").expect("valid pattern"));
    assert_eq!(compact.lines(&report)[0], "({a}, 8) -> 2");
    assert_eq!(LineFormatter::default().lines(&report)[0], "({a}, 8) -> 2.00");
}

#[test]
fn test_counts_agree_with_groups() {
    let analyzer = Analyzer::default();
    let source = fs::read_to_string(fixture_path("prose.txt")).expect("fixture");
    let groups = analyzer.sorted_groups(source.lines());
    let counts = analyzer.counts(source.lines());

    assert_eq!(counts.len(), groups.len());
    for (key, tokens) in &groups {
        assert_eq!(counts[key], tokens.len());
    }
}

#[test]
fn test_prose_fixture_report() {
    let report = DocumentLoader::from_path(fixture_path("prose.txt"))
        .expect("fixture exists")
        .analyze(&Analyzer::default())
        .expect("analysis");

    assert_eq!(report.token_count(), 29);
    let out = FormatRegistry::with_defaults()
        .serialize(&report, "line")
        .expect("line format");
    insta::assert_snapshot!(out.trim_end(), @r"
    ({a, e, i, y}, 14) -> 6.00
    ({e, i, o}, 11) -> 4.00
    ({e, o}, 9) -> 2.00
    ({a, i, o, u}, 6) -> 2.50
    ({e, i, o}, 5) -> 1.67
    ({a, e, i}, 4) -> 1.50
    ({a, e}, 3) -> 1.18
    ({i, o}, 2) -> 1.00
    ");
}

#[test]
fn test_config_file_drives_analysis() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("textalyzer.toml");
    fs::write(
        &path,
        "[analysis]\ndelimiter = \"strict\"\norder = \"ascending\"\n",
    )
    .expect("write config");

    let config = Loader::new().with_file(&path).build().expect("config");
    let analyzer = Analyzer::new(AnalyzerConfig::from_settings(&config.analysis).expect("settings"));
    let report = analyzer.report(["well-known, worn-out"]);

    let lines = LineFormatter::default().lines(&report);
    assert_eq!(
        lines,
        vec!["({o, u}, 3) -> 2.00", "({e, o}, 4) -> 1.00", "({o}, 5) -> 1.00"]
    );
}

#[test]
fn test_every_preset_runs_on_fixture() {
    let source = fs::read_to_string(fixture_path("prose.txt")).expect("fixture");
    let registry = ConfigRegistry::with_defaults();
    for preset in registry.list_all() {
        let report = Analyzer::new(preset.config.clone()).report(source.lines());
        assert!(!report.is_empty(), "preset '{}' produced no terms", preset.name);
    }
}

#[test]
fn test_written_report_reads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("report.txt");
    let analyzer = Analyzer::new(AnalyzerConfig::vowels().with_order(KeyOrder::Ascending));
    let report = DocumentLoader::from_path(fixture_path("prose.txt"))
        .expect("fixture exists")
        .analyze(&analyzer)
        .expect("analysis");

    ReportWriter::write(&output, LineFormatter::default().lines(&report)).expect("write");
    let parsed = DocumentLoader::read_report(&output).expect("read back");

    let keys: Vec<_> = parsed.iter().map(|line| line.key).collect();
    assert_eq!(keys, vec![2, 3, 4, 5, 6, 9, 11, 14]);
    assert_eq!(parsed[0].symbols, vec!['i', 'o']);
    assert_eq!(parsed[7].average, Some(6.0));
}

#[test]
fn test_value_sums_across_document() {
    let analyzer = Analyzer::default();
    let tokens = analyzer.tokens(["it was the age of wisdom, it was the age of foolishness"]);
    let sums = grouping::sum_by_value(&tokens, Metric::VowelCount);

    assert_eq!(sums["it"], 2);
    assert_eq!(sums["age"], 4);
    assert_eq!(sums["foolishness"], 4);
    assert_eq!(sums.keys().next().map(String::as_str), Some("it"));
}

#[test]
fn test_lexical_report_reads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("lexical.txt");
    let config = ConfigRegistry::with_defaults()
        .resolve("lexical")
        .expect("lexical preset");
    let report = DocumentLoader::from_string("ab ba, {x} cd")
        .analyze(&Analyzer::new(config))
        .expect("analysis");

    let lines = LineFormatter::default().lines(&report);
    assert_eq!(
        lines,
        vec!["({,, a, b, x, {, }}, 3) -> 3.00", "({a, b, c, d}, 2) -> 2.00"]
    );

    ReportWriter::write(&output, &lines).expect("write");
    let parsed = DocumentLoader::read_report(&output).expect("read back");
    assert_eq!(parsed[0].key, 3);
    assert_eq!(parsed[0].symbols, vec![',', 'a', 'b', 'x', '{', '}']);
    assert_eq!(parsed[1].symbols, vec!['a', 'b', 'c', 'd']);
    assert_eq!(parsed[1].average, Some(2.0));
}
