//! Shared single-line input field component used by both forms.

use ratatui::prelude::Rect;
use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a bordered single-line input with a label and focus styling.
///
/// A trailing cursor marker is drawn when the field is focused so it reads
/// as editable even while empty.
pub fn render_text_input(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let display = if focused {
        format!("{value}█")
    } else {
        value.to_string()
    };

    let input = Paragraph::new(display)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(label));

    f.render_widget(input, area);
}

/// Render a bordered read-only value, styled as derived output.
pub fn render_derived_field(f: &mut Frame, area: Rect, label: &str, value: &str) {
    let field = Paragraph::new(value)
        .style(theme::derived_field_style())
        .block(Block::default().borders(Borders::ALL).title(label));

    f.render_widget(field, area);
}
