//! JSON report format

use super::registry::Formatter;
use super::FormatError;
use crate::report::Report;

/// Pretty-printed JSON array of term summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, report: &Report) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(&report.summaries())
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "JSON array of per-term summaries"
    }
}
