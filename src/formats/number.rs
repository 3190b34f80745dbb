//! Locale-independent rendering of averages

use super::FormatError;
use std::fmt;

/// How a floating-point average is rendered. Output never depends on locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberFormat {
    /// Exactly `decimals` fraction digits: `3.54`, `1.00`.
    Fixed { decimals: usize },
    /// DecimalFormat-style pattern such as `#.##` or `0.0#`.
    ///
    /// `0` fraction digits are always printed, `#` digits only when non-zero. At least one
    /// integer digit is always printed, more when the integer part has more `0`s.
    Pattern {
        pattern: String,
        min_integer: usize,
        min_fraction: usize,
        max_fraction: usize,
    },
}

impl NumberFormat {
    pub const DEFAULT_DECIMALS: usize = 2;

    pub fn fixed(decimals: usize) -> Self {
        NumberFormat::Fixed { decimals }
    }

    pub fn from_pattern(pattern: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidNumberPattern(pattern.to_string());
        let (integer, fraction) = match pattern.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (pattern, ""),
        };
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        // no grouping separators: output is never grouped
        if !integer.chars().all(|c| matches!(c, '#' | '0')) {
            return Err(invalid());
        }
        // mandatory digits must come before optional ones
        let min_fraction = fraction.chars().take_while(|c| *c == '0').count();
        if !fraction.chars().skip(min_fraction).all(|c| c == '#') {
            return Err(invalid());
        }
        Ok(NumberFormat::Pattern {
            pattern: pattern.to_string(),
            min_integer: integer.chars().filter(|c| *c == '0').count().max(1),
            min_fraction,
            max_fraction: fraction.chars().count(),
        })
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            NumberFormat::Fixed { decimals } => format!("{:.*}", decimals, value),
            NumberFormat::Pattern {
                min_integer,
                min_fraction,
                max_fraction,
                ..
            } => {
                let rendered = format!("{:.*}", max_fraction, value);
                let (sign, digits) = match rendered.strip_prefix('-') {
                    Some(digits) => ("-", digits),
                    None => ("", rendered.as_str()),
                };
                let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
                let mut fraction = fraction.to_string();
                while fraction.len() > *min_fraction && fraction.ends_with('0') {
                    fraction.pop();
                }
                let mut out = String::from(sign);
                for _ in integer.len()..*min_integer {
                    out.push('0');
                }
                out.push_str(integer);
                if !fraction.is_empty() {
                    out.push('.');
                    out.push_str(&fraction);
                }
                out
            }
        }
    }

    /// Render an optional average; an undefined one renders as `n/a`.
    pub fn format_opt(&self, value: Option<f64>) -> String {
        match value {
            Some(value) => self.format(value),
            None => UNDEFINED.to_string(),
        }
    }
}

/// Rendering of an undefined average (empty term).
pub const UNDEFINED: &str = "n/a";

impl Default for NumberFormat {
    fn default() -> Self {
        Self::fixed(Self::DEFAULT_DECIMALS)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::Fixed { decimals } => write!(f, "fixed({decimals})"),
            NumberFormat::Pattern { pattern, .. } => write!(f, "pattern({pattern})"),
        }
    }
}
