//! numconv library exports: numeral validation and base conversion.

pub mod core;
pub mod shell;

pub use crate::core::{
    Action, AppState, Base, ConversionResult, ConvertError, FormatIssue, convert_to_all_bases,
    update, validate,
};
