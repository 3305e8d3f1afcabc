use uuid::Uuid;

/// Commands produced from user input and applied synchronously by the
/// executor. Every state transition in the app is one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // List cursor
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,
    NavigateToLogs,

    // Add-friend panel
    ToggleAddFriendPanel,
    SubmitAddFriendForm,
    CancelAddFriendForm,

    // Friend selection / split-bill form
    ToggleSelectFriend { friend_id: Uuid },
    CyclePayer,
    SubmitSplitForm,
    CancelSplitForm,

    // Shared form editing
    NavigateFormField { forward: bool },
    AppendFormFieldChar { c: char },
    DeleteFormFieldChar,
    ClearFormField,

    // Log screen
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,

    // View toggles
    ToggleHelp,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}
