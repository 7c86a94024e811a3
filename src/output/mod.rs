//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI:
//! category and option listings, region listings, and the final URL line.

use colored::Colorize;

/// Format a category or region-group header
#[must_use]
pub fn section_header(title: &str, quiet: bool) -> String {
    if quiet {
        title.to_string()
    } else {
        title.bold().to_string()
    }
}

/// Format one filter option line, marking active selections
#[must_use]
pub fn option_line(label: &str, code: &str, active: bool, quiet: bool) -> String {
    if quiet {
        return code.to_string();
    }
    let marker = if active { "[x]".green().to_string() } else { "[ ]".to_string() };
    format!("  {} {} {}", marker, label, format!("({code})").dimmed())
}

/// Format one country line within a region group
#[must_use]
pub fn country_line(label: &str, quiet: bool) -> String {
    if quiet {
        label.to_string()
    } else {
        format!("  {label}")
    }
}

/// Format the final URL for display
#[must_use]
pub fn url_line(url: &str, quiet: bool) -> String {
    if quiet {
        url.to_string()
    } else {
        url.cyan().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_output_is_plain() {
        assert_eq!(option_line("Operation Metro", "MP_Subway", true, true), "MP_Subway");
        assert_eq!(country_line("Canada", true), "Canada");
        assert_eq!(url_line("http://example.com", true), "http://example.com");
        assert_eq!(section_header("Maps", true), "Maps");
    }

    #[test]
    fn test_option_line_contains_label_and_code() {
        let line = option_line("Operation Metro", "MP_Subway", false, false);
        assert!(line.contains("Operation Metro"));
        assert!(line.contains("MP_Subway"));
        assert!(line.contains("[ ]"));
    }
}
