//! Canonical one-line-per-term report format

use super::number::NumberFormat;
use super::registry::Formatter;
use super::FormatError;
use crate::report::Report;
use crate::term::Term;
use crate::token::{Metric, SymbolClass};

/// Renders `({<symbols>}, <key>) -> <average>` lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineFormatter {
    number: NumberFormat,
}

impl LineFormatter {
    pub fn new(number: NumberFormat) -> Self {
        LineFormatter { number }
    }

    /// Render a single term. Pure: the term is only read.
    pub fn format_term(&self, term: &Term, property: Metric, symbols: SymbolClass) -> String {
        let symbols = term
            .unique_symbols(symbols)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "({{{}}}, {}) -> {}",
            symbols,
            term.key(),
            self.number.format_opt(term.average_per_token(property))
        )
    }

    /// One rendered line per term, in report order.
    pub fn lines(&self, report: &Report) -> Vec<String> {
        report
            .terms()
            .iter()
            .map(|term| self.format_term(term, report.property(), report.symbols()))
            .collect()
    }
}

impl Formatter for LineFormatter {
    fn name(&self) -> &str {
        "line"
    }

    fn serialize(&self, report: &Report) -> Result<String, FormatError> {
        let mut out = String::new();
        for line in self.lines(report) {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "One `({symbols}, key) -> average` line per term"
    }
}

/// Render a term with the default settings: vowel symbols, vowel count per token, two decimals.
pub fn format_term(term: &Term) -> String {
    LineFormatter::default().format_term(term, Metric::VowelCount, SymbolClass::Vowels)
}
