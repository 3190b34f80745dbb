//! Config-driven analysis pipeline
//!
//! This module provides:
//! - [AnalyzerConfig] - the plain values that parametrize one run (delimiter, filter, key,
//!   bucket order, aggregated property, symbol class)
//! - [ConfigRegistry] - named presets of those values
//! - [Analyzer] - executes lines → raw words → filtered words → tokens → buckets → terms

pub mod analyzer;
pub mod config;

pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, ConfigRegistry, KeySelector, ProcessingConfig};

use crate::lexing::LexingError;
use thiserror::Error;

/// Errors while resolving a pipeline configuration
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error("Config '{0}' not found")]
    ConfigNotFound(String),
    #[error(transparent)]
    Lexing(#[from] LexingError),
}
