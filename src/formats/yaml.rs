//! YAML report format

use super::registry::Formatter;
use super::FormatError;
use crate::report::Report;

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, report: &Report) -> Result<String, FormatError> {
        serde_yaml::to_string(&report.summaries())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML sequence of per-term summaries"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::build_term;
    use crate::token::{Metric, SymbolClass, Token};

    #[test]
    fn test_yaml_rows() {
        let report = Report::new(
            vec![build_term(3, ["sky"].map(Token::new))],
            Metric::VowelCount,
            SymbolClass::Vowels,
        );
        let out = YamlFormatter.serialize(&report).expect("serialize");
        let value: serde_yaml::Value = serde_yaml::from_str(&out).expect("valid yaml");
        assert_eq!(value[0]["key"].as_u64(), Some(3));
        assert_eq!(value[0]["symbols"][0].as_str(), Some("y"));
        assert_eq!(value[0]["average"].as_f64(), Some(1.0));
    }
}
