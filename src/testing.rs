use uuid::Uuid;

use crate::app_core::AppCore;
use crate::input::{Key, KeyEvent};
use crate::models::{FriendIdSource, Roster};
use crate::state::{AppState, FriendsState};
use crate::ui::screens::Screen;

/// Deterministic id source for tests: consecutive integers as UUIDs.
///
/// The demo roster drawn through this source gets ids 1, 2 and 3, so tests
/// can refer to friends without digging them out of state first.
#[derive(Debug)]
pub struct SequentialIdSource {
    next: u128,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendIdSource for SequentialIdSource {
    fn next_id(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}

/// Drives the application core by key sequence, no terminal required.
pub struct TestApp {
    core: AppCore<SequentialIdSource>,
}

impl TestApp {
    /// Create a test app seeded with the demo roster (ids 1..=3)
    pub fn new() -> Self {
        Self {
            core: AppCore::new(SequentialIdSource::new()),
        }
    }

    /// Create a test app with no friends at all
    pub fn with_empty_roster() -> Self {
        Self {
            core: AppCore::with_roster(SequentialIdSource::new(), Roster::new()),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type a string character by character
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// The Friends screen state; panics if another screen is on top.
    pub fn friends_state(&self) -> &FriendsState {
        match self.state().current_screen() {
            Screen::Friends(friends_state) => friends_state,
            other => panic!("Expected Friends screen, got {other:?}"),
        }
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
