//! # Core Conversion Logic
//!
//! Validation, radix conversion and the converter's application state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Base (alphabets)     │
//!                    │  • converter (pure fns) │
//!                    │  • AppState + Action    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │   Shell    │      │   Mobile   │      │    API     │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (prompt)   │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`base`]: The `Base` enum and its digit alphabets
//! - [`converter`]: `validate`, `convert_to_all_bases` and `ConversionResult`
//! - [`state`]: The `AppState` struct — everything a screen needs to draw
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: `~/.numconv/config.toml` loading and resolution

pub mod action;
pub mod base;
pub mod config;
pub mod converter;
pub mod state;

// Re-export commonly used types for convenience
pub use action::{Action, update};
pub use base::Base;
pub use converter::{ConversionResult, ConvertError, FormatIssue, convert_to_all_bases, validate};
pub use state::AppState;
