use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AddFriendField, AddFriendFormState};
use crate::ui::components::{popup, text_input};
use crate::ui::{layouts, theme};

/// Render the add-friend dialog as a centered popup.
///
/// Two text fields; submitting with either one empty silently does nothing,
/// so no error row is ever shown.
pub fn render_add_friend_form(f: &mut Frame, form: &AddFriendFormState) {
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::FORM,
        " Add Friend ",
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Image URL
            Constraint::Min(1),    // Hint
        ])
        .split(inner);

    text_input::render_text_input(
        f,
        chunks[0],
        "Friend name",
        &form.name,
        form.current_field == AddFriendField::Name,
    );

    text_input::render_text_input(
        f,
        chunks[1],
        "Image URL",
        &form.image,
        form.current_field == AddFriendField::Image,
    );

    let hint = Paragraph::new("Tab: next field  Enter: add  Esc: cancel")
        .style(theme::help_text_style());
    f.render_widget(hint, chunks[2]);
}
