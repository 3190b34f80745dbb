//! Rendering reports
//!
//! The canonical output is one line per term (see [line]):
//!
//! ```text
//! ({a, e}, 4) -> 1.50
//! ```
//!
//! i.e. the bucket's unique symbols in ascending order, the bucket key, and the average
//! property per token. Structured alternatives ([json], [yaml]) serialize the same data as
//! [TermSummary](crate::report::TermSummary) rows. All formats implement [Formatter] and are
//! looked up by name through [FormatRegistry].

pub mod json;
pub mod line;
pub mod number;
pub mod parser;
pub mod registry;
pub mod yaml;

pub use json::JsonFormatter;
pub use line::{format_term, LineFormatter};
pub use number::NumberFormat;
pub use parser::{parse_term_line, ParsedTermLine};
pub use registry::{FormatRegistry, Formatter};
pub use yaml::YamlFormatter;

use thiserror::Error;

/// Error that can occur while rendering or re-reading a report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Number pattern is not of the `#.##` / `0.00` family
    #[error("Invalid number pattern '{0}'")]
    InvalidNumberPattern(String),
    /// A report line does not have the `({..}, key) -> average` shape
    #[error("Malformed report line '{line}': {message}")]
    MalformedLine { line: String, message: String },
}
