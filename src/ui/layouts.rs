//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, SCREEN_MARGIN, SIDE_PANEL_WIDTH, TITLE_HEIGHT};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split a content area into the friends list and the split-bill side panel.
///
/// Returns (list_area, panel_area)
pub fn content_with_side_panel(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Form popup (50% x 45%) - for the add-friend dialog
    pub const FORM: (u16, u16) = (50, 45);

    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
