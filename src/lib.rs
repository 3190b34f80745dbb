//! # textalyzer
//!
//! Lexical statistics over plain text: lines are split into words, words are cleaned into
//! tokens, tokens are bucketed by an integer key (word length by default), and every bucket
//! is reported with the union of its vowels and the average vowel count per token.
//!
//! ```text
//! lines -> [Tokenizer] -> raw words -> [TokenFilter] -> tokens -> [grouping] -> buckets
//!       -> [TermBuilder] -> terms -> [Formatter] -> "({a, e}, 4) -> 1.50"
//! ```
//!
//! The stages live in their own modules and are wired together by
//! [pipeline::Analyzer], configured from named presets or from a `textalyzer-config` file.
//! File I/O is confined to [loader].

pub mod formats;
pub mod grouping;
pub mod lexing;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod term;
pub mod token;

pub use formats::{FormatRegistry, LineFormatter, NumberFormat};
pub use loader::{DocumentLoader, LoaderError, ReportWriter};
pub use pipeline::{Analyzer, AnalyzerConfig, ConfigRegistry};
pub use report::Report;
pub use term::{Term, TermBuilder};
pub use token::Token;
