//! # Application State
//!
//! Everything a converter screen needs to draw itself, in one record.
//! No presentation types live here; callers decide how to show it.
//!
//! ```text
//! AppState
//! ├── base: Base                        // selected input base
//! ├── input: String                     // raw text as typed
//! ├── result: Option<ConversionResult>  // last successful conversion
//! └── error: Option<String>             // message for the last failed Convert
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::base::Base;
use crate::core::config::ResolvedConfig;
use crate::core::converter::ConversionResult;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub base: Base,
    pub input: String,
    pub result: Option<ConversionResult>,
    pub error: Option<String>,
}

impl AppState {
    pub fn new(base: Base) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base)
    }

    /// Prompt label for the current base, e.g. `Enter Binary Number`.
    pub fn input_label(&self) -> String {
        format!("Enter {} Number", self.base.name())
    }

    /// Hint line for the current base, e.g. `Valid characters: 0-1 (e.g., 1010)`.
    pub fn input_hint(&self) -> String {
        format!(
            "Valid characters: {} (e.g., {})",
            self.base.digits_hint(),
            self.base.example()
        )
    }

    /// True when there is nothing to show: no input, no result, no error.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.result.is_none() && self.error.is_none()
    }
}
