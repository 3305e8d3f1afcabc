use crate::commands::{executor, handlers};
use crate::input::KeyEvent;
use crate::models::{FriendIdSource, Roster};
use crate::state::AppState;

/// Testable application core without terminal dependencies.
///
/// Generic over I (id source) for zero-cost abstraction: production uses
/// random v4 UUIDs, tests inject a deterministic sequence so friend ids
/// are predictable.
pub struct AppCore<I: FriendIdSource> {
    ui_state: AppState,
    ids: I,
}

impl<I: FriendIdSource> AppCore<I> {
    /// Create a core seeded with the demo roster.
    pub fn new(mut ids: I) -> Self {
        let roster = Roster::demo(&mut ids);
        Self {
            ui_state: AppState::new(roster),
            ids,
        }
    }

    /// Create a core with an explicit starting roster.
    pub fn with_roster(ids: I, roster: Roster) -> Self {
        Self {
            ui_state: AppState::new(roster),
            ids,
        }
    }

    /// Handle keyboard input, the single entry point for user events.
    ///
    /// Translates the key press to an AppCommand and executes it against
    /// the state; unbound keys are ignored.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            executor::execute_command(command, &mut self.ui_state, &mut self.ids);
        }
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
