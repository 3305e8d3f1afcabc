use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, FriendsState, InputMode};
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: the help popup swallows everything except close and quit.
    // Checked before form modes so Esc closes the popup, not an open form.
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: modal forms on the Friends screen
    if let Screen::Friends(friends_state) = state.current_screen() {
        match friends_state.input_mode {
            InputMode::AddFriend => return handle_add_friend_form_keys(event),
            InputMode::SplitBill => return handle_split_form_keys(event, friends_state),
            InputMode::Normal => {}
        }
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by 'g' -> jump to top of list
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Jump to bottom: 'G' (Shift+g)
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),

        // Global back navigation (left/h)
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Friends screen
        (Screen::Friends(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Friends(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Friends(..), Key::Char('a')) => Some(AppCommand::ToggleAddFriendPanel),
        (Screen::Friends(friends_state), Key::Enter | Key::Char('s')) => friends_state
            .cursor_friend()
            .map(|friend| AppCommand::ToggleSelectFriend {
                friend_id: friend.id,
            }),

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),

        // Ignore other keys
        _ => None,
    }
}

/// Handle keyboard input while the add-friend popup is open
fn handle_add_friend_form_keys(event: KeyEvent) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+L to clear the focused field
    if event.ctrl && matches!(key, Key::Char('l')) {
        return Some(AppCommand::ClearFormField);
    }

    match key {
        Key::Esc => Some(AppCommand::CancelAddFriendForm),
        Key::Enter => Some(AppCommand::SubmitAddFriendForm),
        Key::Tab => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        Key::Char(c) => Some(AppCommand::AppendFormFieldChar { c }),
        _ => None,
    }
}

/// Handle keyboard input while the split-bill panel is open.
///
/// The friends list stays navigable underneath the form: j/k move the
/// cursor and 's' re-selects, so picking the selected friend again closes
/// the panel just like re-clicking it would.
fn handle_split_form_keys(event: KeyEvent, friends_state: &FriendsState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+L to clear the focused field
    if event.ctrl && matches!(key, Key::Char('l')) {
        return Some(AppCommand::ClearFormField);
    }

    match key {
        Key::Esc => Some(AppCommand::CancelSplitForm),
        Key::Enter => Some(AppCommand::SubmitSplitForm),
        Key::Tab => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),

        // List stays live under the form
        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
        Key::Char('s') => friends_state
            .cursor_friend()
            .map(|friend| AppCommand::ToggleSelectFriend {
                friend_id: friend.id,
            }),

        // '?' is free here since the amount fields only take digits
        Key::Char('?') => Some(AppCommand::ToggleHelp),

        // Payer is a two-value select, not a text field
        Key::Char(' ') | Key::Left | Key::Right => Some(AppCommand::CyclePayer),

        // Amount fields take digits and a decimal point only
        Key::Char(c) if c.is_ascii_digit() || c == '.' => {
            Some(AppCommand::AppendFormFieldChar { c })
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Roster;
    use crate::state::{AddFriendFormState, SplitFormState};
    use crate::testing::SequentialIdSource;

    /// App state on the Friends screen with the demo roster
    fn friends_state() -> AppState {
        let mut ids = SequentialIdSource::new();
        AppState::new(Roster::demo(&mut ids))
    }

    fn friends_mut(state: &mut AppState) -> &mut FriendsState {
        match state.current_screen_mut() {
            Screen::Friends(s) => s,
            other => panic!("expected Friends screen, got {other:?}"),
        }
    }

    #[test]
    fn test_quit_command() {
        let state = friends_state();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('q')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_help_toggle() {
        let state = friends_state();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('?')), &state),
            Some(AppCommand::ToggleHelp)
        );
    }

    #[test]
    fn test_help_visible_blocks_other_commands() {
        let mut state = friends_state();
        state.help_visible = true;

        // When help is visible, most keys should be ignored
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('j')), &state),
            None
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('a')), &state),
            None
        );

        // Only '?', 'Esc', and 'q' should work
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Esc), &state),
            Some(AppCommand::ToggleHelp)
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('q')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_g_sets_pending_key() {
        let state = friends_state();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('g')), &state),
            Some(AppCommand::SetPendingKey('g'))
        );
    }

    #[test]
    fn test_gg_navigates_to_top() {
        let mut state = friends_state();
        state.pending_key = Some('g');

        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('g')), &state),
            Some(AppCommand::NavigateToTop)
        );
    }

    #[test]
    fn test_gl_navigates_to_logs() {
        let mut state = friends_state();
        state.pending_key = Some('g');

        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('l')), &state),
            Some(AppCommand::NavigateToLogs)
        );
    }

    #[test]
    fn test_invalid_multi_key_sequence_clears_pending() {
        let mut state = friends_state();
        state.pending_key = Some('g');

        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('x')), &state),
            Some(AppCommand::ClearPendingKey)
        );
    }

    #[test]
    fn test_enter_selects_cursor_friend() {
        let state = friends_state();
        let expected_id = match state.current_screen() {
            Screen::Friends(s) => s.cursor_friend().unwrap().id,
            _ => unreachable!(),
        };

        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Enter), &state),
            Some(AppCommand::ToggleSelectFriend {
                friend_id: expected_id
            })
        );
    }

    #[test]
    fn test_enter_with_empty_roster_is_ignored() {
        let state = AppState::new(Roster::new());
        assert_eq!(handle_key_input(KeyEvent::new(Key::Enter), &state), None);
    }

    #[test]
    fn test_add_friend_mode_captures_text_keys() {
        let mut state = friends_state();
        let friends = friends_mut(&mut state);
        friends.input_mode = InputMode::AddFriend;
        friends.add_form = Some(AddFriendFormState::new());

        // 'q' is text input here, not quit
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('q')), &state),
            Some(AppCommand::AppendFormFieldChar { c: 'q' })
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Esc), &state),
            Some(AppCommand::CancelAddFriendForm)
        );
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('l')), &state),
            Some(AppCommand::ClearFormField)
        );
    }

    #[test]
    fn test_split_mode_keeps_list_navigable() {
        let mut state = friends_state();
        let friends = friends_mut(&mut state);
        let friend_id = friends.cursor_friend().unwrap().id;
        friends.input_mode = InputMode::SplitBill;
        friends.selected_friend_id = Some(friend_id);
        friends.split_form = Some(SplitFormState::new(friend_id));

        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('j')), &state),
            Some(AppCommand::SelectNext)
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('s')), &state),
            Some(AppCommand::ToggleSelectFriend { friend_id })
        );
        // Letters that are neither digits nor bindings are ignored
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('z')), &state),
            None
        );
        // Digits feed the focused amount buffer
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('7')), &state),
            Some(AppCommand::AppendFormFieldChar { c: '7' })
        );
    }
}
