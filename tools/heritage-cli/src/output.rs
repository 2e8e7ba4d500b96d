//! Output formatting for the CLI.

use console::{measure_text_width, pad_str, style, Alignment};
use heritage_commerce::catalog::{Badge, StockStatus};
use heritage_commerce::Money;
use heritage_i18n::{lookup, Language};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a dimmed line under a header.
    pub fn subtitle(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", style(msg).dim());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    ///
    /// Widths are display columns, so styled and Arabic cells line up.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad_str(col, *width, Alignment::Left, None).into_owned())
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print a separator sized to a table.
    pub fn rule(&self, widths: &[usize]) {
        if self.json {
            return;
        }
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        println!("  {}", style("─".repeat(total)).dim());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price with the localized currency label.
pub fn format_price(price: &Money, language: Language) -> String {
    price.display_with(lookup("currency", language))
}

/// Styled badge text.
pub fn badge_label(badge: &Badge, language: Language) -> String {
    let label = badge.label(language);
    match badge {
        Badge::BestSeller => style(label).yellow().bold().to_string(),
        Badge::LowStock(_) => style(label).red().to_string(),
        Badge::New => style(label).green().to_string(),
    }
}

/// Styled availability text.
pub fn stock_label(status: &StockStatus, language: Language) -> String {
    let label = status.label(language);
    match status {
        StockStatus::InStock => style(label).green().to_string(),
        StockStatus::LowStock(_) => style(label).yellow().to_string(),
        StockStatus::MadeToOrder => style(label).dim().to_string(),
    }
}

/// Truncate to `width` display columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if measure_text_width(text) <= width {
        return text.to_string();
    }
    console::truncate_str(text, width, "…").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&Money::kwd(450_000), Language::En), "450.000 KWD");
        assert_eq!(format_price(&Money::kwd(28_500), Language::Ar), "28.500 د.ك");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Carpets", 10), "Carpets");
        assert_eq!(measure_text_width(&truncate("Persian Style Hand Woven Carpet", 12)), 12);
    }
}
