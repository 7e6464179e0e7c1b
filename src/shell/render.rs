//! Text rendering of converter state. Display prefixes are applied here
//! and nowhere else.

use crate::core::base::Base;
use crate::core::converter::ConversionResult;
use crate::core::state::AppState;

/// Shown in place of a value when there is no result yet.
pub const PLACEHOLDER: &str = "---";

/// `value` with the base's display prefix, or the placeholder if empty.
pub fn format_value(base: Base, value: &str, show_prefixes: bool) -> String {
    if value.is_empty() {
        return PLACEHOLDER.to_string();
    }
    if show_prefixes {
        format!("{}{}", base.prefix(), value)
    } else {
        value.to_string()
    }
}

/// One row per base: name, radix and value.
///
/// ```text
/// Decimal      (Base 10)  255
/// Binary       (Base 2)   0b11111111
/// ```
pub fn render_result(result: Option<&ConversionResult>, show_prefixes: bool) -> String {
    Base::DISPLAY_ORDER
        .iter()
        .map(|&base| {
            let value = result.map(|r| r.get(base)).unwrap_or("");
            let radix = format!("(Base {})", base.radix());
            format!(
                "{:<12} {:<10} {}",
                base.name(),
                radix,
                format_value(base, value, show_prefixes)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_header(state: &AppState) -> String {
    format!("{}\n{}", state.input_label(), state.input_hint())
}

/// Error line (if any) followed by the result rows.
pub fn render_state(state: &AppState, show_prefixes: bool) -> String {
    let rows = render_result(state.result.as_ref(), show_prefixes);
    match &state.error {
        Some(error) => format!("Error: {error}\n{rows}"),
        None => rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_prefixes() {
        assert_eq!(format_value(Base::Binary, "101", true), "0b101");
        assert_eq!(format_value(Base::Octal, "17", true), "0o17");
        assert_eq!(format_value(Base::Decimal, "15", true), "15");
        assert_eq!(format_value(Base::Hexadecimal, "F", true), "0xF");
        assert_eq!(format_value(Base::Hexadecimal, "F", false), "F");
    }

    #[test]
    fn test_format_value_placeholder() {
        assert_eq!(format_value(Base::Binary, "", true), PLACEHOLDER);
    }

    #[test]
    fn test_render_result_rows_in_display_order() {
        let result = ConversionResult::from_value(10);
        let text = render_result(Some(&result), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Decimal"));
        assert!(lines[0].ends_with(" 10"));
        assert!(lines[1].ends_with("0b1010"));
        assert!(lines[2].ends_with("0o12"));
        assert!(lines[3].ends_with("0xA"));
    }

    #[test]
    fn test_render_empty_state_shows_placeholders() {
        let text = render_state(&AppState::default(), true);
        assert_eq!(text.matches(PLACEHOLDER).count(), 4);
        assert!(!text.contains("Error"));
    }

    #[test]
    fn test_render_state_with_error() {
        let state = AppState {
            error: Some("Please enter a number".into()),
            ..Default::default()
        };
        let text = render_state(&state, false);
        assert!(text.starts_with("Error: Please enter a number\n"));
    }
}
