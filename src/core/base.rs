//! # Bases and Digit Alphabets
//!
//! The four supported radixes and the fixed table of characters each one
//! accepts. Also carries the per-base labels a caller needs to describe a
//! base to a user (name, digit hint, example, display prefix).
//!
//! ```text
//! Base         radix  alphabet        prefix
//! Binary         2    0 1             0b
//! Octal          8    0-7             0o
//! Decimal       10    0-9             (none)
//! Hexadecimal   16    0-9 A-F a-f     0x
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    #[value(alias = "bin", alias = "2")]
    Binary,
    #[value(alias = "oct", alias = "8")]
    Octal,
    #[default]
    #[value(alias = "dec", alias = "10")]
    Decimal,
    #[value(alias = "hex", alias = "16")]
    Hexadecimal,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    /// Order in which result rows are presented.
    pub const DISPLAY_ORDER: [Base; 4] = [Base::Decimal, Base::Binary, Base::Octal, Base::Hexadecimal];

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Returns `None` for any radix outside {2, 8, 10, 16}.
    pub fn from_radix(radix: u32) -> Option<Base> {
        match radix {
            2 => Some(Base::Binary),
            8 => Some(Base::Octal),
            10 => Some(Base::Decimal),
            16 => Some(Base::Hexadecimal),
            _ => None,
        }
    }

    /// Numeric value of `ch` in this base, or `None` if `ch` is not in the alphabet.
    /// Hex letters are accepted in either case.
    pub fn digit_value(self, ch: char) -> Option<u32> {
        let value = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='f' => ch as u32 - 'a' as u32 + 10,
            'A'..='F' => ch as u32 - 'A' as u32 + 10,
            _ => return None,
        };
        (value < self.radix()).then_some(value)
    }

    pub fn accepts(self, ch: char) -> bool {
        self.digit_value(ch).is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::Binary => "Binary",
            Base::Octal => "Octal",
            Base::Decimal => "Decimal",
            Base::Hexadecimal => "Hexadecimal",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Base::Binary => "Bin",
            Base::Octal => "Oct",
            Base::Decimal => "Dec",
            Base::Hexadecimal => "Hex",
        }
    }

    /// Human-readable description of the alphabet, e.g. `0-9, A-F`.
    pub fn digits_hint(self) -> &'static str {
        match self {
            Base::Binary => "0-1",
            Base::Octal => "0-7",
            Base::Decimal => "0-9",
            Base::Hexadecimal => "0-9, A-F",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            Base::Binary => "1010",
            Base::Octal => "12",
            Base::Decimal => "10",
            Base::Hexadecimal => "A",
        }
    }

    /// Display-only prefix. Never part of a `ConversionResult` field.
    pub fn prefix(self) -> &'static str {
        match self {
            Base::Binary => "0b",
            Base::Octal => "0o",
            Base::Decimal => "",
            Base::Hexadecimal => "0x",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_lowercase())
    }
}
