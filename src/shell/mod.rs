//! # Shell Adapter
//!
//! The terminal-facing layer. Reads lines, translates them into
//! `core::Action` values and prints the resulting state.
//!
//! This is the only module that writes to the user's terminal; the core
//! never does. Two modes:
//!
//! - **One-shot**: `numconv --from hex ff` validates, converts and prints once.
//! - **Interactive**: a prompt loop. Lines starting with `:` are commands,
//!   anything else is a number to convert in the current base.

pub mod render;

use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::core::action::{self, Action, update};
use crate::core::base::Base;
use crate::core::config::ResolvedConfig;
use crate::core::converter::{self, ConversionResult};
use crate::core::state::AppState;

const HELP: &str = "\
Commands:
  :bin :oct :dec :hex   switch input base
  :clear                clear input and results
  :help                 show this help
  :quit                 exit (also Ctrl+D)
Anything else is converted from the current base.";

/// A parsed prompt line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Action>),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(name) = trimmed.strip_prefix(':') else {
        return Command::Dispatch(vec![Action::InputChanged(line.to_string()), Action::Convert]);
    };
    match name.to_ascii_lowercase().as_str() {
        "bin" | "binary" => Command::Dispatch(vec![Action::SelectBase(Base::Binary)]),
        "oct" | "octal" => Command::Dispatch(vec![Action::SelectBase(Base::Octal)]),
        "dec" | "decimal" => Command::Dispatch(vec![Action::SelectBase(Base::Decimal)]),
        "hex" | "hexadecimal" => Command::Dispatch(vec![Action::SelectBase(Base::Hexadecimal)]),
        "clear" | "c" => Command::Dispatch(vec![Action::Clear]),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// Validates first, then converts. Returns the message to show on failure.
pub fn convert_once(text: &str, base: Base) -> Result<ConversionResult, String> {
    if !converter::validate(text, base.radix()) {
        // check() tells an empty input apart from a bad digit
        return Err(match converter::check(text, base) {
            Err(e) => action::error_message(base, &e),
            Ok(_) => action::invalid_base_message(base),
        });
    }
    converter::convert(text, base).map_err(|e| {
        debug!("Conversion failed: {}", e);
        action::error_message(base, &e)
    })
}

/// Prints a single conversion. `Ok(false)` means the input was rejected
/// and the message has gone to `err`.
pub fn run_once(
    config: &ResolvedConfig,
    text: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match convert_once(text, config.base) {
        Ok(result) => {
            if json {
                let body = serde_json::to_string_pretty(&result)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(out, "{body}")?;
            } else {
                writeln!(out, "{}", render::render_result(Some(&result), config.show_prefixes))?;
            }
            Ok(true)
        }
        Err(message) => {
            writeln!(err, "Error: {message}")?;
            Ok(false)
        }
    }
}

fn prompt(state: &AppState) -> String {
    format!("[{}]> ", state.base.short_name().to_lowercase())
}

/// Interactive prompt loop over `input` until `:quit` or end of input.
pub fn run_interactive(
    config: &ResolvedConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<AppState> {
    let mut state = AppState::from_config(config);
    info!("Interactive session starting in base {}", state.base.radix());

    writeln!(out, "Number System Converter (:help for commands)")?;
    writeln!(out, "{}", render::render_header(&state))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", prompt(&state))?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Unknown(name) => writeln!(out, "Unknown command {name} (try :help)")?,
            Command::Dispatch(actions) => {
                let base_before = state.base;
                for action in actions {
                    state = update(state, action);
                }
                if state.base != base_before {
                    writeln!(out, "{}", render::render_header(&state))?;
                } else {
                    writeln!(out, "{}", render::render_state(&state, config.show_prefixes))?;
                }
            }
        }
    }

    info!("Interactive session finished");
    Ok(state)
}
