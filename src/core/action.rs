//! # Actions
//!
//! Everything that can happen on the converter becomes an `Action`.
//! User picks a base? That's `Action::SelectBase(base)`.
//! User hits convert? That's `Action::Convert`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```

use log::debug;

use crate::core::base::Base;
use crate::core::converter::{self, ConvertError, FormatIssue};
use crate::core::state::AppState;

pub const MSG_EMPTY_INPUT: &str = "Please enter a number";
pub const MSG_INVALID_INPUT: &str = "Invalid input. Please check your number.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Switch input base. Input, result and error are discarded.
    SelectBase(Base),
    InputChanged(String),
    Convert,
    /// Back to the empty screen. The selected base is kept.
    Clear,
}

/// "Please enter a valid binary number" and friends.
pub fn invalid_base_message(base: Base) -> String {
    format!("Please enter a valid {base} number")
}

/// Maps a conversion failure to the text the user sees.
pub fn error_message(base: Base, err: &ConvertError) -> String {
    match err {
        ConvertError::InvalidFormat {
            issue: FormatIssue::Empty,
            ..
        } => MSG_EMPTY_INPUT.to_string(),
        ConvertError::InvalidFormat { .. } => invalid_base_message(base),
        ConvertError::InvalidValue { .. } => MSG_INVALID_INPUT.to_string(),
    }
}

pub fn update(state: AppState, action: Action) -> AppState {
    debug!("Action: {:?}", action);
    match action {
        Action::SelectBase(base) => AppState::new(base),
        Action::InputChanged(input) => AppState { input, ..state },
        Action::Convert => match converter::convert(&state.input, state.base) {
            Ok(result) => AppState {
                result: Some(result),
                error: None,
                ..state
            },
            // A failed convert leaves the previous result on screen
            Err(err) => {
                debug!("Convert failed: {}", err);
                AppState {
                    error: Some(error_message(state.base, &err)),
                    ..state
                }
            }
        },
        Action::Clear => AppState::new(state.base),
    }
}
