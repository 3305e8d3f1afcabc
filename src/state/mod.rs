pub mod validators;

use ratatui::widgets::TableState;
use std::cell::RefCell;
use uuid::Uuid;

use crate::models::{Friend, Payer, Roster, DEFAULT_AVATAR_TEMPLATE};
use crate::ui::screens::Screen;

/// Input mode of the Friends screen. The add-friend panel and the split-bill
/// form are never open at the same time; the mode enforces it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    AddFriend,
    SplitBill,
}

/// Form field for the add-friend popup
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Image => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        // Two fields, so forward and backward are the same hop
        self.next()
    }
}

/// Form field for the split-bill panel. The friend's share is derived and
/// never focusable.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitField {
    #[default]
    Bill,
    YourShare,
    Payer,
}

impl SplitField {
    pub fn next(self) -> Self {
        match self {
            Self::Bill => Self::YourShare,
            Self::YourShare => Self::Payer,
            Self::Payer => Self::Bill,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Bill => Self::Payer,
            Self::YourShare => Self::Bill,
            Self::Payer => Self::YourShare,
        }
    }
}

/// State for the add-friend popup: two text buffers and a focus marker.
#[derive(Debug, Clone)]
pub struct AddFriendFormState {
    pub current_field: AddFriendField,
    pub name: String,
    pub image: String,
}

impl AddFriendFormState {
    pub fn new() -> Self {
        Self {
            current_field: AddFriendField::Name,
            name: String::new(),
            // Pre-filled so adding a friend only requires typing a name
            image: DEFAULT_AVATAR_TEMPLATE.to_string(),
        }
    }
}

impl Default for AddFriendFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// State for the split-bill panel, keyed by the selected friend.
///
/// Re-created fresh whenever the selection changes, so buffers never leak
/// between friends. Amount buffers hold raw user input (digits and one
/// decimal point); parsing happens on read.
#[derive(Debug, Clone)]
pub struct SplitFormState {
    pub friend_id: Uuid,
    pub current_field: SplitField,
    pub bill: String,
    pub your_share: String,
    pub payer: Payer,
}

impl SplitFormState {
    pub fn new(friend_id: Uuid) -> Self {
        Self {
            friend_id,
            current_field: SplitField::Bill,
            bill: String::new(),
            your_share: String::new(),
            payer: Payer::You,
        }
    }

    /// Bill total in cents; an empty or unparsable buffer counts as zero.
    pub fn bill_cents(&self) -> i64 {
        validators::parse_amount(&self.bill).unwrap_or(0)
    }

    /// Your share in cents; an empty or unparsable buffer counts as zero.
    pub fn your_share_cents(&self) -> i64 {
        validators::parse_amount(&self.your_share).unwrap_or(0)
    }

    /// Derived, never stored: what the friend owes for this bill.
    pub fn friend_share_cents(&self) -> i64 {
        self.bill_cents() - self.your_share_cents()
    }
}

/// State of the Friends screen: the roster plus everything transient around
/// it (cursor, selection, open forms).
#[derive(Debug, Clone)]
pub struct FriendsState {
    pub roster: Roster,
    pub table_state: RefCell<TableState>,
    pub input_mode: InputMode,
    /// The friend currently targeted by a bill split, if any. A lookup key
    /// into the roster, not an owning reference.
    pub selected_friend_id: Option<Uuid>,
    pub add_form: Option<AddFriendFormState>,
    pub split_form: Option<SplitFormState>,
}

impl FriendsState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            table_state: RefCell::new(TableState::default().with_selected(0)),
            input_mode: InputMode::Normal,
            selected_friend_id: None,
            add_form: None,
            split_form: None,
        }
    }

    /// The friend targeted by the open split form, if any.
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected_friend_id.and_then(|id| self.roster.get(id))
    }

    /// The friend under the list cursor, if any.
    pub fn cursor_friend(&self) -> Option<&Friend> {
        let index = self.table_state.borrow().selected()?;
        self.roster.friends().get(index)
    }
}

impl Default for FriendsState {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new(roster: Roster) -> Self {
        Self {
            history: vec![Screen::Friends(FriendsState::new(roster))],

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}

/// List cursor movement with wrap-around, shared by table-backed screens.
pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select_last();
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }
}

impl Scrollable for FriendsState {
    fn num_items(&self) -> usize {
        self.roster.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
