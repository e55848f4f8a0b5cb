//! Report formatting utilities for terminal output

use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format a ratio (0.25 = 25%) with one decimal
pub fn format_percentage(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "n/a".to_string();
    }
    format!("{:.1}%", ratio * 100.0)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.5333), "53.3%");
        assert_eq!(format_percentage(-0.1), "-10.0%");
        assert_eq!(format_percentage(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.5, 1.0, 4), "██░░");
        assert_eq!(format_bar(2.0, 1.0, 3), "███");
        assert_eq!(format_bar(0.0, 1.0, 3), "░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Rent", 16), "Rent");
        assert_eq!(truncate("Versicherungen", 8), "Versi...");
        assert_eq!(truncate("Übernachtung", 5), "Üb...");
    }

    #[test]
    fn test_format_money_colored() {
        assert_eq!(format_money_colored(Money::zero(), "€"), "€0.00");
        assert!(format_money_colored(Money::from_units(-5), "€").starts_with("\x1b[31m"));
        assert!(format_money_colored(Money::from_units(5), "$").contains("$5.00"));
    }
}
