//! Output formatting utilities

use console::{style, Style};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("{} {}", style("→").blue(), message);
}

/// Create a styled section header with a rule underneath
pub fn header(text: &str) -> String {
    let rule = "─".repeat(console::measure_text_width(text).max(14));
    format!("{}\n{}", style(text).bold(), style(rule).dim())
}

/// Create a styled `key: value` line
pub fn key_value(key: &str, value: impl std::fmt::Display) -> String {
    format!("{} {}", style(format!("{}:", key)).cyan(), value)
}

/// Style for hints at the end of listings
pub fn hint_style() -> Style {
    Style::new().dim()
}

/// Style for keys in listings
pub fn key_style() -> Style {
    Style::new().cyan()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering_without_colors() {
        console::set_colors_enabled(false);
        assert_eq!(key_value("Range", "v1.0.0 → HEAD"), "Range: v1.0.0 → HEAD");
        assert_eq!(header("Stats"), format!("Stats\n{}", "─".repeat(14)));
    }
}
