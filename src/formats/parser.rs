//! Parser for canonical report lines
//!
//! Grammar: `<line> = "(" "{" [<symbol> (", " <symbol>)*] "}" ", " <key> ")" " -> " <average>`
//! where `<average>` is a decimal number or `n/a`.
//!
//! A symbol is exactly one character of any kind, including `,`, `{`, `}` and spaces, so a
//! character-class report such as `({ , ,, a, {}}, 3) -> 3.00` parses without escaping.

use super::number::UNDEFINED;
use super::FormatError;
use crate::token::Key;
use chumsky::prelude::*;

type ParserError = Simple<char>;

/// The fields recovered from one rendered term line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTermLine {
    pub symbols: Vec<char>,
    pub key: Key,
    pub average: Option<f64>,
}

fn term_line() -> impl Parser<char, ParsedTermLine, Error = ParserError> {
    let symbol = || any::<char, ParserError>();

    let listed = symbol()
        .then(just(", ").ignore_then(symbol()).repeated())
        .then_ignore(just('}'))
        .map(|(first, mut rest)| {
            rest.insert(0, first);
            rest
        });

    // `{}}` is the single symbol `}`, `{}` the empty set
    let symbols = just('{').ignore_then(listed.or(just('}').to(Vec::new())));

    let key = text::int::<_, ParserError>(10).try_map(|digits: String, span| {
        digits
            .parse::<Key>()
            .map_err(|e| Simple::custom(span, e.to_string()))
    });

    let number = filter::<_, _, ParserError>(|c: &char| c.is_ascii_digit() || *c == '.' || *c == '-')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse::<f64>()
                .map(Some)
                .map_err(|e| Simple::custom(span, e.to_string()))
        });

    let average = just(UNDEFINED).to(None::<f64>).or(number);

    symbols
        .then_ignore(just(", "))
        .then(key)
        .delimited_by(just('('), just(')'))
        .then_ignore(just(" -> "))
        .then(average)
        .then_ignore(end())
        .map(|((symbols, key), average)| ParsedTermLine {
            symbols,
            key,
            average,
        })
}

/// Parse a line produced by [LineFormatter](super::LineFormatter).
pub fn parse_term_line(line: &str) -> Result<ParsedTermLine, FormatError> {
    term_line().parse(line.trim_end()).map_err(|errors| {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        FormatError::MalformedLine {
            line: line.to_string(),
            message,
        }
    })
}
