/// One person in the roster. `id` is unique and stable for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// A directed "id is friends with friend_id" edge. Nothing enforces
/// symmetry, uniqueness, or that `friend_id` names an existing record; the
/// seed data deliberately carries a duplicate edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendLink {
    pub id: i64,
    pub friend_id: i64,
}
