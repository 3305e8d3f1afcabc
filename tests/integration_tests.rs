use tally::input::{Key, KeyEvent};
use tally::models::{Payer, DEFAULT_AVATAR_TEMPLATE};
use tally::state::InputMode;
use tally::testing::TestApp;
use tally::ui::screens::Screen;

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    // Initially should not quit
    app.assert_not_quit();

    // Press 'q' to quit
    app.send_key(Key::Char('q'));

    // Assert app should quit
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();

    // Initially help is hidden
    assert!(!app.state().help_visible);

    // Press '?' to show help
    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Press '?' again to hide
    app.send_key(Key::Char('?'));
    assert!(!app.state().help_visible);

    // Press '?' then 'Esc' to hide
    app.send_key(Key::Char('?'));
    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_demo_roster_is_seeded() {
    let app = TestApp::new();
    let friends = app.friends_state().roster.friends();

    assert_eq!(friends.len(), 3);
    assert_eq!(friends[0].name, "Clark");
    assert_eq!(friends[0].balance, -700);
    assert_eq!(friends[1].name, "Sarah");
    assert_eq!(friends[1].balance, 2000);
    assert_eq!(friends[2].name, "Anthony");
    assert_eq!(friends[2].balance, 0);

    // Every seeded avatar derives from the shared template
    for friend in friends {
        assert!(friend.image.starts_with(DEFAULT_AVATAR_TEMPLATE));
        assert!(friend.image.contains("?u="));
    }
}

#[test]
fn test_navigation_with_j_k() {
    let mut app = TestApp::new();

    let selected = |app: &TestApp| app.friends_state().table_state.borrow().selected();

    assert_eq!(selected(&app), Some(0));

    app.send_key(Key::Char('j'));
    assert_eq!(selected(&app), Some(1));

    app.send_key(Key::Char('j'));
    assert_eq!(selected(&app), Some(2));

    // Wraps around at the bottom
    app.send_key(Key::Char('j'));
    assert_eq!(selected(&app), Some(0));

    // And back up
    app.send_key(Key::Char('k'));
    assert_eq!(selected(&app), Some(2));
}

#[test]
fn test_gg_and_capital_g_jump_to_ends() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('G'));
    assert_eq!(app.friends_state().table_state.borrow().selected(), Some(2));

    app.send_key(Key::Char('g'));
    assert_eq!(app.state().pending_key, Some('g'));
    app.send_key(Key::Char('g'));
    assert_eq!(app.state().pending_key, None);
    assert_eq!(app.friends_state().table_state.borrow().selected(), Some(0));
}

#[test]
fn test_pending_key_cleared_after_invalid_sequence() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('g'));
    assert_eq!(app.state().pending_key, Some('g'));

    // Press an invalid second key
    app.send_key(Key::Char('x'));
    assert_eq!(app.state().pending_key, None);
}

#[test]
fn test_add_friend_flow() {
    let mut app = TestApp::new();

    // Open the add-friend panel
    app.send_key(Key::Char('a'));
    assert_eq!(app.friends_state().input_mode, InputMode::AddFriend);

    // The image field is pre-filled with the default template
    let form = app.friends_state().add_form.clone().unwrap();
    assert_eq!(form.image, DEFAULT_AVATAR_TEMPLATE);

    // Type a name and submit
    app.type_str("Diana");
    app.send_key(Key::Enter);

    let friends_state = app.friends_state();
    assert_eq!(friends_state.input_mode, InputMode::Normal);
    assert!(friends_state.add_form.is_none());

    let friends = friends_state.roster.friends();
    assert_eq!(friends.len(), 4);

    let diana = &friends[3];
    assert_eq!(diana.name, "Diana");
    assert_eq!(diana.balance, 0);
    assert_eq!(
        diana.image,
        format!("{}?u={}", DEFAULT_AVATAR_TEMPLATE, diana.id)
    );

    // Cursor follows the new entry
    assert_eq!(friends_state.table_state.borrow().selected(), Some(3));
}

#[test]
fn test_add_friend_with_empty_name_is_a_silent_noop() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('a'));
    app.send_key(Key::Enter);

    // Nothing added, the form stays open with its buffers intact
    let friends_state = app.friends_state();
    assert_eq!(friends_state.roster.len(), 3);
    assert_eq!(friends_state.input_mode, InputMode::AddFriend);
    assert!(friends_state.add_form.is_some());
}

#[test]
fn test_add_friend_with_empty_image_is_a_silent_noop() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('a'));
    app.type_str("Diana");

    // Move to the image field and clear it
    app.send_key(Key::Tab);
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('l')));
    app.send_key(Key::Enter);

    let friends_state = app.friends_state();
    assert_eq!(friends_state.roster.len(), 3);
    assert_eq!(friends_state.input_mode, InputMode::AddFriend);
}

#[test]
fn test_add_panel_toggles_closed() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('a'));
    assert_eq!(app.friends_state().input_mode, InputMode::AddFriend);

    // Esc cancels without adding
    app.send_key(Key::Esc);
    assert_eq!(app.friends_state().input_mode, InputMode::Normal);
    assert!(app.friends_state().add_form.is_none());
    assert_eq!(app.friends_state().roster.len(), 3);
}

#[test]
fn test_selecting_a_friend_opens_the_split_form() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);

    let friends_state = app.friends_state();
    let clark = friends_state.roster.friends()[0].id;
    assert_eq!(friends_state.selected_friend_id, Some(clark));
    assert_eq!(friends_state.input_mode, InputMode::SplitBill);

    let form = friends_state.split_form.as_ref().unwrap();
    assert_eq!(form.friend_id, clark);
    assert!(form.bill.is_empty());
    assert_eq!(form.payer, Payer::You);
}

#[test]
fn test_reselecting_the_same_friend_toggles_selection_off() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);
    assert!(app.friends_state().selected_friend_id.is_some());

    // 's' on the same cursor row closes the panel again
    app.send_key(Key::Char('s'));

    let friends_state = app.friends_state();
    assert_eq!(friends_state.selected_friend_id, None);
    assert!(friends_state.split_form.is_none());
    assert_eq!(friends_state.input_mode, InputMode::Normal);
}

#[test]
fn test_selecting_another_friend_moves_selection_and_resets_the_form() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);
    app.type_str("42");
    assert_eq!(app.friends_state().split_form.as_ref().unwrap().bill, "42");

    // Move the cursor down and reselect: only Sarah is selected now
    app.send_key(Key::Char('j'));
    app.send_key(Key::Char('s'));

    let friends_state = app.friends_state();
    let sarah = friends_state.roster.friends()[1].id;
    assert_eq!(friends_state.selected_friend_id, Some(sarah));

    let form = friends_state.split_form.as_ref().unwrap();
    assert_eq!(form.friend_id, sarah);
    assert!(form.bill.is_empty());
}

#[test]
fn test_split_bill_when_you_paid() {
    let mut app = TestApp::new();

    // Select Clark (balance -7.00) and split a 100.00 bill, your share 40.00
    app.send_key(Key::Enter);
    app.type_str("100");
    app.send_key(Key::Tab);
    app.type_str("40");

    // Friend share is derived before submitting
    let form = app.friends_state().split_form.clone().unwrap();
    assert_eq!(form.friend_share_cents(), 6000);

    app.send_key(Key::Enter);

    let friends_state = app.friends_state();
    assert_eq!(friends_state.roster.friends()[0].balance, -700 + 6000);

    // Committing always clears the selection
    assert_eq!(friends_state.selected_friend_id, None);
    assert!(friends_state.split_form.is_none());
    assert_eq!(friends_state.input_mode, InputMode::Normal);
}

#[test]
fn test_split_bill_when_the_friend_paid() {
    let mut app = TestApp::new();

    // Select Sarah (balance 20.00): bill 50.00, your share 10.00, Sarah pays
    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);
    app.type_str("50");
    app.send_key(Key::Tab);
    app.type_str("10");
    app.send_key(Key::Tab);
    app.send_key(Key::Char(' ')); // switch payer to the friend

    assert_eq!(
        app.friends_state().split_form.as_ref().unwrap().payer,
        Payer::Friend
    );

    app.send_key(Key::Enter);

    let friends_state = app.friends_state();
    assert_eq!(friends_state.roster.friends()[1].balance, 2000 - 1000);
    assert_eq!(friends_state.selected_friend_id, None);
}

#[test]
fn test_your_share_cannot_exceed_the_bill() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);
    app.type_str("100");
    app.send_key(Key::Tab);
    app.type_str("120");

    // The keystroke that would cross 100.00 is rejected, earlier ones stand
    let form = app.friends_state().split_form.clone().unwrap();
    assert_eq!(form.your_share, "12");

    // Backspace and keep typing: every keystroke that stays under the cap
    // lands, the one that would cross it ("199") is dropped
    app.send_key(Key::Backspace);
    app.type_str("99.50");
    let form = app.friends_state().split_form.clone().unwrap();
    assert_eq!(form.your_share, "19.50");
    assert!(form.your_share_cents() <= form.bill_cents());
}

#[test]
fn test_split_submit_with_missing_values_is_a_silent_noop() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);
    app.type_str("100");
    app.send_key(Key::Enter); // your share still empty

    let friends_state = app.friends_state();
    assert_eq!(friends_state.roster.friends()[0].balance, -700);
    assert_eq!(friends_state.input_mode, InputMode::SplitBill);
    assert!(friends_state.split_form.is_some());
}

#[test]
fn test_opening_add_panel_clears_selection_on_cancel_path() {
    let mut app = TestApp::new();

    // Select, close via Esc, then open the add panel
    app.send_key(Key::Enter);
    app.send_key(Key::Esc);
    app.send_key(Key::Char('a'));

    let friends_state = app.friends_state();
    assert_eq!(friends_state.selected_friend_id, None);
    assert!(friends_state.split_form.is_none());
    assert_eq!(friends_state.input_mode, InputMode::AddFriend);
}

#[test]
fn test_empty_roster_shows_no_selection_commands() {
    let mut app = TestApp::with_empty_roster();

    // Enter does nothing without a cursor row
    app.send_key(Key::Enter);
    assert_eq!(app.friends_state().selected_friend_id, None);
    assert_eq!(app.friends_state().input_mode, InputMode::Normal);

    // Adding still works
    app.send_key(Key::Char('a'));
    app.type_str("First");
    app.send_key(Key::Enter);
    assert_eq!(app.friends_state().roster.len(), 1);
}

#[test]
fn test_logs_screen_navigation() {
    let mut app = TestApp::new();

    // 'g' then 'l' navigates to the logs screen
    app.send_key(Key::Char('g'));
    app.send_key(Key::Char('l'));
    assert!(matches!(app.state().current_screen(), Screen::Logs(_)));

    // 'h' navigates back to the friends screen
    app.send_key(Key::Char('h'));
    assert!(matches!(app.state().current_screen(), Screen::Friends(_)));
}

#[test]
fn test_roster_survives_screen_navigation() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('a'));
    app.type_str("Diana");
    app.send_key(Key::Enter);
    assert_eq!(app.friends_state().roster.len(), 4);

    app.send_key(Key::Char('g'));
    app.send_key(Key::Char('l'));
    app.send_key(Key::Char('h'));

    assert_eq!(app.friends_state().roster.len(), 4);
}
