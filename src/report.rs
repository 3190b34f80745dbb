//! The result of one analysis run

use crate::term::Term;
use crate::token::{Key, Metric, SymbolClass};
use serde::Serialize;

/// Terms in report order, plus what was aggregated over them.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    terms: Vec<Term>,
    property: Metric,
    symbols: SymbolClass,
}

/// Serializable per-term row used by the structured formats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermSummary {
    pub key: Key,
    pub tokens: usize,
    pub symbols: Vec<char>,
    pub sum: usize,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub average: Option<f64>,
}

impl Report {
    pub fn new(terms: Vec<Term>, property: Metric, symbols: SymbolClass) -> Self {
        Report {
            terms,
            property,
            symbols,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn property(&self) -> Metric {
        self.property
    }

    pub fn symbols(&self) -> SymbolClass {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of tokens across all terms.
    pub fn token_count(&self) -> usize {
        self.terms.iter().map(Term::len).sum()
    }

    pub fn summarize(&self, term: &Term) -> TermSummary {
        let stats = term.statistics(self.property);
        TermSummary {
            key: term.key(),
            tokens: term.len(),
            symbols: term.unique_symbols(self.symbols).into_iter().collect(),
            sum: stats.sum(),
            min: stats.min(),
            max: stats.max(),
            average: stats.average(),
        }
    }

    pub fn summaries(&self) -> Vec<TermSummary> {
        self.terms.iter().map(|term| self.summarize(term)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::build_term;
    use crate::token::Token;

    #[test]
    fn test_summaries() {
        let report = Report::new(
            vec![
                build_term(4, ["tree", "boat"].map(Token::new)),
                build_term(3, ["sky"].map(Token::new)),
            ],
            Metric::VowelCount,
            SymbolClass::Vowels,
        );
        assert_eq!(report.token_count(), 3);

        let summaries = report.summaries();
        assert_eq!(
            summaries[0],
            TermSummary {
                key: 4,
                tokens: 2,
                symbols: vec!['a', 'e', 'o'],
                sum: 4,
                min: Some(2),
                max: Some(2),
                average: Some(2.0),
            }
        );
        assert_eq!(summaries[1].symbols, vec!['y']);
    }
}
