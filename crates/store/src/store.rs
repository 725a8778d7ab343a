use crate::{
    fixtures,
    records::{FriendLink, UserRecord},
};

/// In-memory data layer seeded from the literal fixtures. There is no
/// mutation API; everything after [`FixtureStore::new`] is a read.
#[derive(Debug)]
pub struct FixtureStore {
    users: Vec<UserRecord>,
    friend_links: Vec<FriendLink>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self {
            users: fixtures::users(),
            friend_links: fixtures::friend_links(),
        }
    }

    /// The full roster, fixture order.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Every directed friendship edge, fixture order, duplicates included.
    pub fn friend_links(&self) -> &[FriendLink] {
        &self.friend_links
    }

    pub fn user_by_id(&self, id: i64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Exact (case-sensitive) email match, first hit wins.
    pub fn user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email_address == email)
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}
