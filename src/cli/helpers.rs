//! Shared helper functions for the interactive session
//!
//! This module contains the small utilities used across the session and
//! table code to avoid duplication.

use console::style;

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", keep)
    }
}

/// Print a green check-marked status line
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a yellow warning line (the modal-alert analogue)
pub fn warn(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), message);
}

/// Print a dim informational line
pub fn notice(message: &str) {
    println!("{}", style(message).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        // must not split inside a multi-byte character
        assert_eq!(truncate_str("Schraubenzieher Größe drei", 10), "Schraub...");
    }
}
