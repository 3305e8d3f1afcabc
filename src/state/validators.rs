use crate::models::Payer;

use super::{AddFriendFormState, SplitFormState};

/// A validated add-friend submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFriend {
    pub name: String,
    pub image_template: String,
}

/// Validate the add-friend form.
///
/// Returns `None` when either buffer is empty. Per the app's contract that
/// is a silent rejection: the caller leaves the form open and untouched.
pub fn validate_add_friend(form: &AddFriendFormState) -> Option<NewFriend> {
    if form.name.is_empty() || form.image.is_empty() {
        return None;
    }

    Some(NewFriend {
        name: form.name.clone(),
        image_template: form.image.clone(),
    })
}

/// Parse a user-typed amount into integer cents.
///
/// Accepts plain decimal input ("12", "12.5", "0.05"). Returns `None` for
/// empty, negative or otherwise unparsable input.
pub fn parse_amount(input: &str) -> Option<i64> {
    if input.is_empty() {
        return None;
    }

    let value: f64 = input.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    Some((value * 100.0).round() as i64)
}

/// A validated split, ready to apply to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    pub bill: i64,
    pub your_share: i64,
    /// Always `bill - your_share`; never stored independently.
    pub friend_share: i64,
    /// Signed delta for the friend's balance.
    pub delta: i64,
}

/// Validate the split form and compute the balance delta.
///
/// An empty or zero bill or share makes the submit a no-op (`None`). If you
/// paid, the friend now owes their own share of the bill; if the friend
/// paid, their balance drops by what you now owe them.
pub fn evaluate_split(form: &SplitFormState) -> Option<SplitOutcome> {
    let bill = parse_amount(&form.bill)?;
    let your_share = parse_amount(&form.your_share)?;
    if bill == 0 || your_share == 0 {
        return None;
    }

    let friend_share = bill - your_share;
    let delta = match form.payer {
        Payer::You => friend_share,
        Payer::Friend => -your_share,
    };

    Some(SplitOutcome {
        bill,
        your_share,
        friend_share,
        delta,
    })
}
