use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::InputMode;
use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    // Use shared popup frame
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    // Create the help list
    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    // Screen-specific help
    match screen {
        Screen::Friends(state) => {
            items.push(("↑/k", "Move cursor up"));
            items.push(("↓/j", "Move cursor down"));
            items.push(("Enter/s", "Select friend to split a bill (again to close)"));
            items.push(("a", "Open or close the add-friend form"));
            // Help is only reachable from Normal and SplitBill modes; the
            // add-friend form captures '?' as text.
            if state.input_mode == InputMode::SplitBill {
                items.push(("", ""));
                items.push(("--- Split a bill ---", ""));
                items.push(("0-9 .", "Type into the focused amount field"));
                items.push(("Tab/Shift+Tab", "Move between fields"));
                items.push(("Space", "Switch who is paying"));
                items.push(("Ctrl+L", "Clear the focused field"));
                items.push(("Enter", "Split the bill"));
                items.push(("Esc", "Close without splitting"));
            }
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("h/←", "Navigate back"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Jump to top of list"));
    items.push(("G", "Jump to bottom of list"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}
