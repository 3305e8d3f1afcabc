pub mod add_friend_form;
pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod popup;
pub mod split_bill_form;
pub mod text_input;
