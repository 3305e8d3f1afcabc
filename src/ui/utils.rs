use ratatui::style::Color;

use super::theme;

/// Currency symbol used throughout the UI. Amounts are demo data, so no
/// locale or multi-currency handling.
pub const CURRENCY_SYMBOL: char = '£';

/// Format an amount in integer cents, e.g. 1234 -> "£12.34", -50 -> "-£0.50"
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, abs / 100, abs % 100)
}

/// Get the appropriate color for a balance value.
/// Re-exports from theme for convenience.
pub fn get_amount_color(cents: i64) -> Color {
    theme::amount_color(cents)
}
