pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use ratatui::Frame;

use crate::log_buffer::LogBuffer;
use crate::state::{AppState, InputMode};
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Friends(friends_state) => {
            friends_screen::render(f, friends_state);

            // The add-friend form floats above the list as a popup
            if friends_state.input_mode == InputMode::AddFriend {
                if let Some(form) = &friends_state.add_form {
                    components::add_friend_form::render_add_friend_form(f, form);
                }
            }
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, logs_state, log_buffer);
        }
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }
}
