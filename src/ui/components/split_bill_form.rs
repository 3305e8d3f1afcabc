use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Friend, Payer};
use crate::state::{SplitField, SplitFormState};
use crate::ui::components::text_input;
use crate::ui::{theme, utils};

/// Render the split-bill side panel for the selected friend.
pub fn render_split_bill_form(f: &mut Frame, area: Rect, form: &SplitFormState, friend: &Friend) {
    let block = Block::default()
        .title(format!(" Split a bill with {} ", friend.name))
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Bill value
            Constraint::Length(3), // Your share
            Constraint::Length(3), // Friend's share (derived)
            Constraint::Length(3), // Who pays
            Constraint::Min(1),    // Hint
        ])
        .split(inner);

    text_input::render_text_input(
        f,
        chunks[0],
        "Bill value",
        &form.bill,
        form.current_field == SplitField::Bill,
    );

    text_input::render_text_input(
        f,
        chunks[1],
        "Your share",
        &form.your_share,
        form.current_field == SplitField::YourShare,
    );

    // Derived from the other two buffers, shown but never editable.
    // Blank until a bill total has been entered, like the original form.
    let friend_share = if form.bill.is_empty() {
        String::new()
    } else {
        utils::format_amount(form.friend_share_cents())
    };
    text_input::render_derived_field(
        f,
        chunks[2],
        &format!("{}'s share", friend.name),
        &friend_share,
    );

    render_payer_field(f, chunks[3], form, friend);

    let hint = Paragraph::new("Tab: next field  Enter: split  Esc: close")
        .style(theme::help_text_style());
    f.render_widget(hint, chunks[4]);
}

/// Two-value select for who picked up the bill.
fn render_payer_field(f: &mut Frame, area: Rect, form: &SplitFormState, friend: &Friend) {
    let focused = form.current_field == SplitField::Payer;

    let style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let value = match form.payer {
        Payer::You => "You".to_string(),
        Payer::Friend => friend.name.clone(),
    };

    let mut spans = vec![Span::styled(value, style)];
    if focused {
        spans.push(Span::styled("  (Space to change)", theme::help_text_style()));
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Who is paying"),
    );

    f.render_widget(field, area);
}
