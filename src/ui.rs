//! Terminal styling

use colored::{ColoredString, Colorize};

/// Turn styling off for the rest of the process. `NO_COLOR` is honored by
/// `colored` without calling this.
pub fn disable_color() {
    colored::control::set_override(false);
}

/// Section title
pub fn heading(text: &str) -> ColoredString {
    text.cyan().bold()
}

/// Question put to the user
pub fn prompt(text: &str) -> ColoredString {
    text.bold()
}

pub fn error(text: &str) -> ColoredString {
    text.red().bold()
}

pub fn hint(text: &str) -> ColoredString {
    text.dimmed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_text_keeps_content() {
        assert!(heading("Trip Duration").to_string().contains("Trip Duration"));
        assert!(error("boom").to_string().contains("boom"));
        assert_eq!(&*prompt("City?"), "City?");
    }
}
