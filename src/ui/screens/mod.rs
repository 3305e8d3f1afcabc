pub mod friends_screen;
pub mod logs_screen;

use crate::state::{FriendsState, LogsState};

#[derive(Debug, Clone)]
pub enum Screen {
    Friends(FriendsState),
    Logs(LogsState),
}
