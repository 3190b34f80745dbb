//! Command-line interface for textalyzer
//! Reads a text file, groups its words and writes one statistics line per group.
//!
//! Usage:
//!   textalyzer `<input>` [--output `<file>`] [--preset `<name>`] [--format `<format>`]
//!   textalyzer --list-presets

use clap::{Arg, ArgAction, ArgMatches, Command};
use textalyzer::formats::{FormatRegistry, JsonFormatter, LineFormatter, NumberFormat, YamlFormatter};
use textalyzer::grouping::KeyOrder;
use textalyzer::lexing::Delimiter;
use textalyzer::loader::{DocumentLoader, ReportWriter};
use textalyzer::pipeline::{Analyzer, AnalyzerConfig, ConfigRegistry};
use textalyzer_config::{Loader, TextalyzerConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("textalyzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Groups the words of a text by length and reports vowel statistics per group")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input text file")
                .required_unless_present("list-presets")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the report to this file instead of stdout"),
        )
        .arg(
            Arg::new("preset")
                .long("preset")
                .short('p')
                .help("Analysis preset (e.g., 'vowels', 'vowels-strict', 'lexical')"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format: line, json or yaml (default from config: line)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .help("Word delimiter: 'whitespace', 'strict' or a regular expression"),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .help("Group order by key: asc or desc")
                .value_parser(["asc", "ascending", "desc", "descending"]),
        )
        .arg(
            Arg::new("ignore-case")
                .long("ignore-case")
                .help("Lowercase words before grouping (true or false)")
                .value_parser(clap::value_parser!(bool)),
        )
        .arg(
            Arg::new("number-pattern")
                .long("number-pattern")
                .help("Decimal pattern for averages, e.g. '#.##' or '0.0'"),
        )
        .arg(
            Arg::new("list-presets")
                .long("list-presets")
                .help("List available analysis presets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable); RUST_LOG takes precedence")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    if matches.get_flag("list-presets") {
        handle_list_presets_command();
        return;
    }

    let input = matches
        .get_one::<String>("input")
        .expect("input is required unless listing presets");
    handle_analyze_command(input, &matches);
}

/// Log to stderr so reports on stdout stay clean.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> TextalyzerConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail(format!("Invalid format override: {}", e)));
    }
    if let Some(pattern) = matches.get_one::<String>("number-pattern") {
        loader = loader
            .set_override("output.number_pattern", pattern.as_str())
            .unwrap_or_else(|e| fail(format!("Invalid number pattern override: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(format!("Configuration error: {}", e)))
}

/// Preset (or config file settings) with explicit command-line flags applied on top.
fn resolve_analysis(matches: &ArgMatches, config: &TextalyzerConfig) -> AnalyzerConfig {
    let mut analysis = match matches.get_one::<String>("preset") {
        Some(name) => {
            let registry = ConfigRegistry::with_defaults();
            registry.resolve(name).unwrap_or_else(|e| {
                eprintln!("Preset error: {}", e);
                eprintln!("\nAvailable presets:");
                for preset in registry.list_all() {
                    eprintln!("  {} - {}", preset.name, preset.description);
                }
                std::process::exit(1);
            })
        }
        None => AnalyzerConfig::from_settings(&config.analysis)
            .unwrap_or_else(|e| fail(format!("Configuration error: {}", e))),
    };

    if let Some(pattern) = matches.get_one::<String>("delimiter") {
        let delimiter = Delimiter::from_setting(pattern)
            .unwrap_or_else(|e| fail(format!("Invalid delimiter: {}", e)));
        analysis = analysis.with_delimiter(delimiter);
    }
    if let Some(order) = matches.get_one::<String>("order") {
        let order = KeyOrder::parse(order)
            .unwrap_or_else(|| fail(format!("Invalid order '{}'", order)));
        analysis = analysis.with_order(order);
    }
    if let Some(ignore_case) = matches.get_one::<bool>("ignore-case") {
        analysis = analysis.with_lowercase(*ignore_case);
    }
    analysis
}

fn format_registry(config: &TextalyzerConfig) -> FormatRegistry {
    let number = match &config.output.number_pattern {
        Some(pattern) => NumberFormat::from_pattern(pattern)
            .unwrap_or_else(|e| fail(format!("Invalid number pattern: {}", e))),
        None => NumberFormat::fixed(config.output.decimals),
    };
    debug!(number = %number, "number format");

    let mut registry = FormatRegistry::new();
    registry.register(LineFormatter::new(number));
    registry.register(JsonFormatter);
    registry.register(YamlFormatter);
    registry
}

/// Handle the analyze command
fn handle_analyze_command(input: &str, matches: &ArgMatches) {
    let config = load_config(matches);
    let analysis = resolve_analysis(matches, &config);
    info!(
        delimiter = analysis.delimiter.pattern(),
        order = %analysis.order,
        property = %analysis.property,
        "resolved analysis"
    );

    let report = DocumentLoader::from_path(input)
        .and_then(|loader| loader.analyze(&Analyzer::new(analysis)))
        .unwrap_or_else(|e| fail(format!("Analysis error: {}", e)));

    let registry = format_registry(&config);
    let format = config.output.format.as_str();
    let formatted = registry.serialize(&report, format).unwrap_or_else(|e| {
        eprintln!("Format error: {}", e);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(path) => ReportWriter::write_str(path, &formatted)
            .unwrap_or_else(|e| fail(format!("Write error: {}", e))),
        None => print!("{}", formatted),
    }
}

/// Handle the list-presets command
fn handle_list_presets_command() {
    let registry = ConfigRegistry::with_defaults();
    println!("Available analysis presets:\n");

    for preset in registry.list_all() {
        println!("  {}", preset.name);
        println!("    {}", preset.description);
        println!();
    }
}

fn fail(message: String) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
