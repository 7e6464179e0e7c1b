//! # Numeral Converter
//!
//! Validates text against a base's alphabet, parses it into a `u64`, and
//! renders that value in all four supported bases.
//!
//! ```text
//! "  ff " ──trim──▶ "ff" ──check(Hex)──▶ parse ──▶ 255
//!                                                   │
//!             ConversionResult { "255", "11111111", "377", "FF" }
//! ```
//!
//! Everything here is a pure function of its arguments.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::base::Base;

/// The same value rendered in every supported base. No display prefixes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub decimal: String,
    pub binary: String,
    pub octal: String,
    pub hexadecimal: String,
}

impl ConversionResult {
    pub fn from_value(value: u64) -> Self {
        Self {
            decimal: value.to_string(),
            binary: format!("{value:b}"),
            octal: format!("{value:o}"),
            hexadecimal: format!("{value:X}"),
        }
    }

    /// The field holding the rendering for `base`.
    pub fn get(&self, base: Base) -> &str {
        match base {
            Base::Binary => &self.binary,
            Base::Octal => &self.octal,
            Base::Decimal => &self.decimal,
            Base::Hexadecimal => &self.hexadecimal,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Why an input failed the alphabet check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatIssue {
    /// Nothing left after trimming whitespace.
    Empty,
    /// `index` counts chars in the trimmed text.
    IllegalChar { ch: char, index: usize },
    UnsupportedBase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// Empty input, a character outside the alphabet, or an unknown radix.
    InvalidFormat { radix: u32, issue: FormatIssue },
    /// Alphabet-valid, but the value does not fit in a `u64`.
    InvalidValue { text: String },
}

impl ConvertError {
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ConvertError::InvalidFormat { .. })
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, ConvertError::InvalidValue { .. })
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidFormat { radix, issue } => match Base::from_radix(*radix) {
                Some(base) => {
                    write!(f, "invalid {base} number: expected digits {}", base.digits_hint())?;
                    match issue {
                        FormatIssue::Empty => write!(f, " (input is empty)"),
                        FormatIssue::IllegalChar { ch, index } => {
                            write!(f, " (found {ch:?} at position {index})")
                        }
                        FormatIssue::UnsupportedBase => Ok(()),
                    }
                }
                None => write!(f, "unsupported base {radix}: expected 2, 8, 10 or 16"),
            },
            ConvertError::InvalidValue { text } => {
                write!(f, "invalid value '{text}': does not fit in {} bits", u64::BITS)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

// ============================================================================
// Validation
// ============================================================================

/// Checks `text` against the alphabet of `base` and returns it trimmed.
pub fn check(text: &str, base: Base) -> Result<&str, ConvertError> {
    let trimmed = text.trim();
    let invalid = |issue| ConvertError::InvalidFormat {
        radix: base.radix(),
        issue,
    };

    if trimmed.is_empty() {
        return Err(invalid(FormatIssue::Empty));
    }
    if let Some((index, ch)) = trimmed.chars().enumerate().find(|&(_, ch)| !base.accepts(ch)) {
        return Err(invalid(FormatIssue::IllegalChar { ch, index }));
    }
    Ok(trimmed)
}

/// True iff `text`, trimmed, is non-empty and uses only digits of `radix`.
/// An unsupported radix is never valid.
pub fn validate(text: &str, radix: u32) -> bool {
    Base::from_radix(radix).is_some_and(|base| check(text, base).is_ok())
}

// ============================================================================
// Conversion
// ============================================================================

/// Parses `text` positionally, most significant digit first.
///
/// Overflow past `u64::MAX` is an `InvalidValue`; the value is never
/// truncated.
pub fn parse(text: &str, base: Base) -> Result<u64, ConvertError> {
    let digits = check(text, base)?;
    let radix = u64::from(base.radix());

    // check() has already rejected every char outside the alphabet
    let mut value: u64 = 0;
    for digit in digits.chars().filter_map(|ch| base.digit_value(ch)) {
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| ConvertError::InvalidValue {
                text: digits.to_string(),
            })?;
    }
    Ok(value)
}

pub fn convert(text: &str, base: Base) -> Result<ConversionResult, ConvertError> {
    let value = parse(text, base)?;
    debug!("Parsed {:?} as {} in base {}", text.trim(), value, base.radix());
    Ok(ConversionResult::from_value(value))
}

/// Radix-number entry point: unsupported radixes fail with `InvalidFormat`.
pub fn convert_to_all_bases(text: &str, radix: u32) -> Result<ConversionResult, ConvertError> {
    let base = Base::from_radix(radix).ok_or(ConvertError::InvalidFormat {
        radix,
        issue: FormatIssue::UnsupportedBase,
    })?;
    convert(text, base)
}
