use uuid::Uuid;

/// Base URL for placeholder avatars. The add-friend form pre-fills its image
/// field with this, and each new friend gets the template suffixed with its
/// own id so avatars stay visually distinct.
pub const DEFAULT_AVATAR_TEMPLATE: &str = "https://i.pravatar.cc/48";

/// Source of unique friend identifiers.
///
/// Injected into the application core so production can use random UUIDs
/// while tests substitute a deterministic sequence.
pub trait FriendIdSource {
    fn next_id(&mut self) -> Uuid;
}

/// Production id source backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl FriendIdSource for RandomIdSource {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Who paid the bill up front; determines the sign of the balance delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    You,
    Friend,
}

impl Payer {
    /// Cycle to the other payer
    pub fn toggle(self) -> Self {
        match self {
            Self::You => Self::Friend,
            Self::Friend => Self::You,
        }
    }
}

/// A tracked friend and the running balance against them.
///
/// `balance` is in integer cents: positive means the friend owes you,
/// negative means you owe the friend, zero means you are settled up.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub balance: i64,
}

impl Friend {
    pub fn is_settled(&self) -> bool {
        self.balance == 0
    }
}

/// Ordered collection of friends, unique by id, insertion order preserved.
///
/// The roster owns every balance. It supports exactly two mutations:
/// appending a new friend and adjusting a single friend's balance.
/// Friends are never removed.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    friends: Vec<Friend>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            friends: Vec::new(),
        }
    }

    /// Roster the app starts with so the screen is usable immediately.
    pub fn demo(ids: &mut dyn FriendIdSource) -> Self {
        let mut roster = Self::new();
        for (name, balance) in [("Clark", -700i64), ("Sarah", 2000), ("Anthony", 0)] {
            let id = roster
                .add_friend(name, DEFAULT_AVATAR_TEMPLATE, ids)
                .map(|friend| friend.id);
            if let Some(id) = id {
                if balance != 0 {
                    roster.apply_balance_delta(id, balance);
                }
            }
        }
        roster
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Friend> {
        self.friends.iter().find(|friend| friend.id == id)
    }

    /// Append a new friend with a zero balance and a fresh id.
    ///
    /// The avatar URL is the template suffixed with the new id. Empty inputs
    /// are a validation guard, not an error: the call silently does nothing
    /// and returns `None`.
    pub fn add_friend(
        &mut self,
        name: &str,
        image_template: &str,
        ids: &mut dyn FriendIdSource,
    ) -> Option<&Friend> {
        if name.is_empty() || image_template.is_empty() {
            return None;
        }

        let id = ids.next_id();
        self.friends.push(Friend {
            id,
            name: name.to_string(),
            image: format!("{image_template}?u={id}"),
            balance: 0,
        });
        self.friends.last()
    }

    /// Add `delta` to the matching friend's balance, leaving every other
    /// entry untouched. Returns `false` (no-op) when the id is unknown.
    pub fn apply_balance_delta(&mut self, id: Uuid, delta: i64) -> bool {
        match self.friends.iter_mut().find(|friend| friend.id == id) {
            Some(friend) => {
                friend.balance += delta;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SequentialIdSource;

    #[test]
    fn add_friend_appends_with_zero_balance() {
        let mut ids = SequentialIdSource::new();
        let mut roster = Roster::new();

        let friend = roster
            .add_friend("Alex", DEFAULT_AVATAR_TEMPLATE, &mut ids)
            .expect("valid inputs should add a friend");
        let id = friend.id;

        assert_eq!(friend.balance, 0);
        assert_eq!(friend.image, format!("{DEFAULT_AVATAR_TEMPLATE}?u={id}"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn add_friend_rejects_empty_inputs() {
        let mut ids = SequentialIdSource::new();
        let mut roster = Roster::new();

        assert!(roster.add_friend("", DEFAULT_AVATAR_TEMPLATE, &mut ids).is_none());
        assert!(roster.add_friend("Alex", "", &mut ids).is_none());
        assert!(roster.is_empty());
    }

    #[test]
    fn distinct_friends_get_distinct_avatars() {
        let mut ids = SequentialIdSource::new();
        let mut roster = Roster::new();

        let first = roster
            .add_friend("Alex", DEFAULT_AVATAR_TEMPLATE, &mut ids)
            .map(|f| f.image.clone())
            .unwrap();
        let second = roster
            .add_friend("Blake", DEFAULT_AVATAR_TEMPLATE, &mut ids)
            .map(|f| f.image.clone())
            .unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn apply_balance_delta_touches_only_the_match() {
        let mut ids = SequentialIdSource::new();
        let mut roster = Roster::new();
        let first = roster
            .add_friend("Alex", DEFAULT_AVATAR_TEMPLATE, &mut ids)
            .map(|f| f.id)
            .unwrap();
        let second = roster
            .add_friend("Blake", DEFAULT_AVATAR_TEMPLATE, &mut ids)
            .map(|f| f.id)
            .unwrap();

        assert!(roster.apply_balance_delta(first, 600));
        assert_eq!(roster.get(first).unwrap().balance, 600);
        assert_eq!(roster.get(second).unwrap().balance, 0);

        assert!(roster.apply_balance_delta(first, -200));
        assert_eq!(roster.get(first).unwrap().balance, 400);
    }

    #[test]
    fn apply_balance_delta_with_unknown_id_is_a_noop() {
        let mut ids = SequentialIdSource::new();
        let mut roster = Roster::new();
        roster.add_friend("Alex", DEFAULT_AVATAR_TEMPLATE, &mut ids);

        assert!(!roster.apply_balance_delta(uuid::Uuid::from_u128(999), 100));
        assert_eq!(roster.friends()[0].balance, 0);
    }

    #[test]
    fn demo_roster_matches_seed_data() {
        let mut ids = SequentialIdSource::new();
        let roster = Roster::demo(&mut ids);

        let balances: Vec<(&str, i64)> = roster
            .friends()
            .iter()
            .map(|f| (f.name.as_str(), f.balance))
            .collect();
        assert_eq!(
            balances,
            vec![("Clark", -700), ("Sarah", 2000), ("Anthony", 0)]
        );
    }
}
