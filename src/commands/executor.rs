use ratatui::widgets::TableState;
use std::cell::RefCell;

use crate::events::AppCommand;
use crate::models::FriendIdSource;
use crate::state::validators;
use crate::state::{
    AddFriendField, AddFriendFormState, AppState, InputMode, LogsState, Scrollable, SplitField,
    SplitFormState,
};
use crate::ui::screens::Screen;

/// Apply a command to the application state.
///
/// This is the only place state transitions happen. Every command runs
/// synchronously to completion before the next event is handled, so no
/// locking or ordering concerns exist.
pub fn execute_command<I: FriendIdSource>(command: AppCommand, state: &mut AppState, ids: &mut I) {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    match command {
        AppCommand::SelectNext => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                friends_state.select_next();
            }
        }

        AppCommand::SelectPrevious => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                friends_state.select_prev();
            }
        }

        AppCommand::NavigateToTop => match state.current_screen_mut() {
            Screen::Friends(friends_state) => {
                if !friends_state.roster.is_empty() {
                    friends_state.table_state =
                        RefCell::new(TableState::default().with_selected(0));
                }
            }
            Screen::Logs(logs_state) => {
                // Scroll to oldest logs (top)
                logs_state.scroll_offset = logs_state.total_entries.saturating_sub(1);
            }
        },

        AppCommand::NavigateToBottom => match state.current_screen_mut() {
            Screen::Friends(friends_state) => {
                let num_items = friends_state.roster.len();
                if num_items > 0 {
                    friends_state.table_state =
                        RefCell::new(TableState::default().with_selected(num_items - 1));
                }
            }
            Screen::Logs(logs_state) => {
                // Scroll to newest logs (bottom)
                logs_state.scroll_offset = 0;
            }
        },

        AppCommand::NavigateBack => {
            state.navigate_back();
        }

        AppCommand::NavigateToLogs => {
            state.navigate_to(Screen::Logs(LogsState::default()));
        }

        AppCommand::ToggleAddFriendPanel => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                if friends_state.input_mode == InputMode::AddFriend {
                    friends_state.add_form = None;
                    friends_state.input_mode = InputMode::Normal;
                } else {
                    // Opening the panel clears any selection; the two forms
                    // are never open together.
                    friends_state.selected_friend_id = None;
                    friends_state.split_form = None;
                    friends_state.add_form = Some(AddFriendFormState::new());
                    friends_state.input_mode = InputMode::AddFriend;
                }
            }
        }

        AppCommand::SubmitAddFriendForm => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                let validated = friends_state
                    .add_form
                    .as_ref()
                    .and_then(validators::validate_add_friend);
                // Invalid submits are silent: the form stays open, untouched.
                if let Some(new_friend) = validated {
                    if let Some(friend) = friends_state.roster.add_friend(
                        &new_friend.name,
                        &new_friend.image_template,
                        ids,
                    ) {
                        tracing::info!("Added friend {} ({})", friend.name, friend.id);
                    }
                    friends_state.add_form = None;
                    friends_state.input_mode = InputMode::Normal;

                    // Put the cursor on the newly appended row
                    let last = friends_state.roster.len().saturating_sub(1);
                    friends_state.table_state =
                        RefCell::new(TableState::default().with_selected(last));
                }
            }
        }

        AppCommand::CancelAddFriendForm => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                friends_state.add_form = None;
                friends_state.input_mode = InputMode::Normal;
            }
        }

        AppCommand::ToggleSelectFriend { friend_id } => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                if friends_state.selected_friend_id == Some(friend_id) {
                    // Re-selecting the selected friend toggles the selection closed
                    friends_state.selected_friend_id = None;
                    friends_state.split_form = None;
                    friends_state.input_mode = InputMode::Normal;
                } else {
                    friends_state.selected_friend_id = Some(friend_id);
                    // Fresh buffers, keyed by the newly selected friend
                    friends_state.split_form = Some(SplitFormState::new(friend_id));
                    friends_state.add_form = None;
                    friends_state.input_mode = InputMode::SplitBill;
                }
            }
        }

        AppCommand::CyclePayer => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                if let Some(form) = &mut friends_state.split_form {
                    if form.current_field == SplitField::Payer {
                        form.payer = form.payer.toggle();
                    }
                }
            }
        }

        AppCommand::SubmitSplitForm => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                let evaluated = friends_state
                    .split_form
                    .as_ref()
                    .and_then(|form| Some((form.friend_id, validators::evaluate_split(form)?)));
                // Invalid submits are silent: the form stays open, untouched.
                if let Some((friend_id, outcome)) = evaluated {
                    if friends_state.roster.apply_balance_delta(friend_id, outcome.delta) {
                        tracing::info!(
                            "Split applied to friend {}: bill {} / your share {} -> delta {}",
                            friend_id,
                            outcome.bill,
                            outcome.your_share,
                            outcome.delta
                        );
                    }
                    // Committing a split always clears the selection
                    friends_state.selected_friend_id = None;
                    friends_state.split_form = None;
                    friends_state.input_mode = InputMode::Normal;
                }
            }
        }

        AppCommand::CancelSplitForm => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                friends_state.selected_friend_id = None;
                friends_state.split_form = None;
                friends_state.input_mode = InputMode::Normal;
            }
        }

        AppCommand::NavigateFormField { forward } => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                match friends_state.input_mode {
                    InputMode::AddFriend => {
                        if let Some(form) = &mut friends_state.add_form {
                            form.current_field = if forward {
                                form.current_field.next()
                            } else {
                                form.current_field.previous()
                            };
                        }
                    }
                    InputMode::SplitBill => {
                        if let Some(form) = &mut friends_state.split_form {
                            form.current_field = if forward {
                                form.current_field.next()
                            } else {
                                form.current_field.previous()
                            };
                        }
                    }
                    InputMode::Normal => {}
                }
            }
        }

        AppCommand::AppendFormFieldChar { c } => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                match friends_state.input_mode {
                    InputMode::AddFriend => {
                        if let Some(form) = &mut friends_state.add_form {
                            match form.current_field {
                                AddFriendField::Name => form.name.push(c),
                                AddFriendField::Image => form.image.push(c),
                            }
                        }
                    }
                    InputMode::SplitBill => {
                        if let Some(form) = &mut friends_state.split_form {
                            match form.current_field {
                                SplitField::Bill => {
                                    let mut candidate = form.bill.clone();
                                    candidate.push(c);
                                    if validators::parse_amount(&candidate).is_some() {
                                        form.bill = candidate;
                                    }
                                }
                                SplitField::YourShare => {
                                    // A keystroke that would push your share past the
                                    // bill total is rejected outright; the buffer keeps
                                    // its previous value.
                                    let mut candidate = form.your_share.clone();
                                    candidate.push(c);
                                    if let Some(share) = validators::parse_amount(&candidate) {
                                        if share <= form.bill_cents() {
                                            form.your_share = candidate;
                                        }
                                    }
                                }
                                SplitField::Payer => {}
                            }
                        }
                    }
                    InputMode::Normal => {}
                }
            }
        }

        AppCommand::DeleteFormFieldChar => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                match friends_state.input_mode {
                    InputMode::AddFriend => {
                        if let Some(form) = &mut friends_state.add_form {
                            match form.current_field {
                                AddFriendField::Name => {
                                    form.name.pop();
                                }
                                AddFriendField::Image => {
                                    form.image.pop();
                                }
                            }
                        }
                    }
                    InputMode::SplitBill => {
                        if let Some(form) = &mut friends_state.split_form {
                            match form.current_field {
                                SplitField::Bill => {
                                    form.bill.pop();
                                }
                                SplitField::YourShare => {
                                    form.your_share.pop();
                                }
                                SplitField::Payer => {}
                            }
                        }
                    }
                    InputMode::Normal => {}
                }
            }
        }

        AppCommand::ClearFormField => {
            if let Screen::Friends(friends_state) = state.current_screen_mut() {
                match friends_state.input_mode {
                    InputMode::AddFriend => {
                        if let Some(form) = &mut friends_state.add_form {
                            match form.current_field {
                                AddFriendField::Name => form.name.clear(),
                                AddFriendField::Image => form.image.clear(),
                            }
                        }
                    }
                    InputMode::SplitBill => {
                        if let Some(form) = &mut friends_state.split_form {
                            match form.current_field {
                                SplitField::Bill => form.bill.clear(),
                                SplitField::YourShare => form.your_share.clear(),
                                SplitField::Payer => form.payer = Default::default(),
                            }
                        }
                    }
                    InputMode::Normal => {}
                }
            }
        }

        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                if logs_state.scroll_offset < logs_state.total_entries.saturating_sub(1) {
                    logs_state.scroll_offset += 1;
                }
            }
        }

        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(1);
            }
        }

        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset =
                    (logs_state.scroll_offset + 20).min(logs_state.total_entries.saturating_sub(1));
            }
        }

        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(20);
            }
        }

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
        }

        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
        }

        AppCommand::ClearPendingKey => {
            state.pending_key = None;
        }

        AppCommand::Quit => {
            state.should_quit = true;
        }
    }

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }
}
