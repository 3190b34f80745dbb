//! Analysis configuration and named presets
//!
//! A preset bundles every knob of a run:
//! 1. How lines are split (delimiter) and words cleaned (filter)
//! 2. Which integer key buckets tokens, and in which order buckets are reported
//! 3. Which property is averaged and which symbols are collected per bucket

use super::PipelineError;
use crate::grouping::KeyOrder;
use crate::lexing::{Delimiter, TokenFilter};
use crate::token::{Key, Metric, SymbolClass, Token};
use std::collections::HashMap;
use std::fmt;
use textalyzer_config::{AnalysisSettings, FilterKind};

/// The grouping key: a built-in metric or any plain function.
#[derive(Clone, Copy)]
pub enum KeySelector {
    Metric(Metric),
    Custom(fn(&Token) -> Key),
}

impl KeySelector {
    pub fn key(&self, token: &Token) -> Key {
        match self {
            KeySelector::Metric(metric) => metric.measure(token),
            KeySelector::Custom(f) => f(token),
        }
    }
}

impl fmt::Debug for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelector::Metric(metric) => f.debug_tuple("Metric").field(metric).finish(),
            KeySelector::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Default for KeySelector {
    fn default() -> Self {
        KeySelector::Metric(Metric::Length)
    }
}

/// Everything one analysis run needs, as plain values.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub delimiter: Delimiter,
    pub filter: TokenFilter,
    pub key: KeySelector,
    pub order: KeyOrder,
    pub property: Metric,
    pub symbols: SymbolClass,
}

impl AnalyzerConfig {
    /// Whitespace split, letters only, grouped by length (longest first), averaging vowels.
    pub fn vowels() -> Self {
        AnalyzerConfig {
            delimiter: Delimiter::whitespace(),
            filter: TokenFilter::alphabetic(),
            key: KeySelector::Metric(Metric::Length),
            order: KeyOrder::Descending,
            property: Metric::VowelCount,
            symbols: SymbolClass::Vowels,
        }
    }

    /// Build from the `[analysis]` section of a loaded configuration.
    pub fn from_settings(settings: &AnalysisSettings) -> Result<Self, PipelineError> {
        let filter = match settings.filter {
            FilterKind::Standard => TokenFilter::Standard {
                lowercase: settings.lowercase,
            },
            FilterKind::Alphabetic => TokenFilter::Alphabetic {
                lowercase: settings.lowercase,
            },
        };
        Ok(AnalyzerConfig {
            delimiter: Delimiter::from_setting(&settings.delimiter)?,
            filter,
            key: KeySelector::Metric(settings.key.into()),
            order: settings.order.into(),
            property: settings.property.into(),
            symbols: settings.symbols.into(),
        })
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_filter(mut self, filter: TokenFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.filter = self.filter.with_lowercase(lowercase);
        self
    }

    pub fn with_key(mut self, key: KeySelector) -> Self {
        self.key = key;
        self
    }

    pub fn with_order(mut self, order: KeyOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_property(mut self, property: Metric) -> Self {
        self.property = property;
        self
    }

    pub fn with_symbols(mut self, symbols: SymbolClass) -> Self {
        self.symbols = symbols;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::vowels()
    }
}

/// A named, described analyzer configuration
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub name: String,
    pub description: String,
    pub config: AnalyzerConfig,
}

/// Registry of named analyzer configurations
pub struct ConfigRegistry {
    configs: HashMap<String, ProcessingConfig>,
}

impl ConfigRegistry {
    /// Name of the preset used when none is requested.
    pub const DEFAULT: &'static str = "vowels";

    /// Create a new empty registry
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a configuration
    pub fn register(&mut self, config: ProcessingConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    /// Get a configuration by name
    pub fn get(&self, name: &str) -> Option<&ProcessingConfig> {
        self.configs.get(name)
    }

    /// Get a configuration by name or fail with [PipelineError::ConfigNotFound]
    pub fn resolve(&self, name: &str) -> Result<AnalyzerConfig, PipelineError> {
        self.get(name)
            .map(|config| config.config.clone())
            .ok_or_else(|| PipelineError::ConfigNotFound(name.to_string()))
    }

    /// Check if a configuration exists
    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// List all configurations (sorted by name)
    pub fn list_all(&self) -> Vec<&ProcessingConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create registry with standard configurations
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(ProcessingConfig {
            name: Self::DEFAULT.into(),
            description: "Letters only, split on whitespace, vowels per word by length (longest first)"
                .into(),
            config: AnalyzerConfig::vowels(),
        });

        registry.register(ProcessingConfig {
            name: "vowels-strict".into(),
            description: "As 'vowels', but also splits on punctuation and quotes".into(),
            config: AnalyzerConfig::vowels().with_delimiter(Delimiter::strict()),
        });

        registry.register(ProcessingConfig {
            name: "lexical".into(),
            description: "Trimmed lowercase words by length, average length and character set"
                .into(),
            config: AnalyzerConfig::vowels()
                .with_filter(TokenFilter::standard())
                .with_property(Metric::Length)
                .with_symbols(SymbolClass::Characters),
        });

        registry.register(ProcessingConfig {
            name: "vowel-classes".into(),
            description: "Words bucketed by vowel count (fewest first), average length".into(),
            config: AnalyzerConfig::vowels()
                .with_key(KeySelector::Metric(Metric::VowelCount))
                .with_order(KeyOrder::Ascending)
                .with_property(Metric::Length),
        });

        registry
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
