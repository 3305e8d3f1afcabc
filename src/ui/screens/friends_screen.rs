use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::models::Friend;
use crate::state::{FriendsState, InputMode};
use crate::ui::{
    components::{empty_state, help_bar, split_bill_form},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &FriendsState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    render_title(f, title_area, state);

    // While a friend is selected the content splits: list left, form right
    if let (Some(form), Some(friend)) = (&state.split_form, state.selected_friend()) {
        let (list_area, panel_area) = layouts::content_with_side_panel(content_area);
        render_friends_table(f, list_area, state);
        split_bill_form::render_split_bill_form(f, panel_area, form, friend);
    } else {
        render_friends_table(f, content_area, state);
    }

    help_bar::render_help_bar(f, help_area, help_text(state));
}

fn render_title(f: &mut Frame, area: Rect, state: &FriendsState) {
    let title = format!("Friends ({})", state.roster.len());
    let paragraph = Paragraph::new(title).style(theme::title_style());
    f.render_widget(paragraph, area);
}

fn render_friends_table(f: &mut Frame, area: Rect, state: &FriendsState) {
    if state.roster.is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            "Friends",
            "No friends yet",
            Some("Press 'a' to add your first friend"),
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Status"),
        Cell::from(Text::from("Balance").right_aligned()),
    ])
    .style(theme::header_style());

    let rows: Vec<Row> = state
        .roster
        .friends()
        .iter()
        .map(|friend| {
            let is_selected = state.selected_friend_id == Some(friend.id);
            let marker = if is_selected { "▸ " } else { "  " };

            let balance_color = utils::get_amount_color(friend.balance);
            let balance_str = utils::format_amount(friend.balance);

            Row::new(vec![
                Cell::from(format!("{}{}", marker, friend.name)),
                Cell::from(status_line(friend)),
                Cell::from(Text::from(balance_str).right_aligned())
                    .style(Style::default().fg(balance_color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Friends"))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

/// One-line settle-up status, colored by who owes whom.
fn status_line(friend: &Friend) -> Line<'static> {
    let amount = utils::format_amount(friend.balance.abs());
    if friend.is_settled() {
        Line::from(Span::styled(
            format!("You and {} are even", friend.name),
            Style::default().fg(theme::COLOR_ZERO),
        ))
    } else if friend.balance > 0 {
        Line::from(Span::styled(
            format!("{} owes you {}", friend.name, amount),
            Style::default().fg(theme::COLOR_POSITIVE),
        ))
    } else {
        Line::from(Span::styled(
            format!("You owe {} {}", friend.name, amount),
            Style::default().fg(theme::COLOR_NEGATIVE),
        ))
    }
}

fn help_text(state: &FriendsState) -> &'static str {
    match state.input_mode {
        InputMode::Normal => "j/k: move  Enter: split a bill  a: add friend  ?: help  q: quit",
        InputMode::AddFriend => "Tab: next field  Enter: add  Esc: cancel",
        InputMode::SplitBill => {
            "Tab: next field  Space: payer  Enter: split  s: reselect  Esc: close"
        }
    }
}
