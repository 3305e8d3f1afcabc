//! Centralized theme constants and style functions for consistent UI styling.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Color for balances in your favor (the friend owes you)
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for balances against you (you owe the friend)
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Color for settled balances
pub const COLOR_ZERO: Color = Color::DarkGray;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for warnings (also the WARN log level)
pub const COLOR_WARNING: Color = Color::Yellow;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Width of the split-bill side panel
pub const SIDE_PANEL_WIDTH: u16 = 44;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for derived, non-editable form values
pub fn derived_field_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

// =============================================================================
// Amount Color Helper
// =============================================================================

/// Get the appropriate color for a balance in cents.
/// Positive = green, negative = red, zero = gray
pub fn amount_color(cents: i64) -> Color {
    if cents > 0 {
        COLOR_POSITIVE
    } else if cents < 0 {
        COLOR_NEGATIVE
    } else {
        COLOR_ZERO
    }
}
