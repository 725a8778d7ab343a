//! The literal seed lists. Order is significant: lookups and projections
//! preserve it, and the duplicate 1 -> 2 edge is intentional.

use crate::records::{FriendLink, UserRecord};

fn user(id: i64, first_name: &str, last_name: &str, email_address: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email_address: email_address.to_string(),
    }
}

pub(crate) fn users() -> Vec<UserRecord> {
    vec![
        user(1, "Tywin", "Lannister", "tywin.lannister@casterlyrock.com"),
        user(2, "Cersei", "Lannister", "cersei.lannister@casterlyrock.com"),
        user(3, "Jaime", "Lannister", "jaime.lannister@casterlyrock.com"),
        user(4, "Tyrion", "Lannister", "tyrion.lannister@casterlyrock.com"),
    ]
}

pub(crate) fn friend_links() -> Vec<FriendLink> {
    vec![
        FriendLink { id: 1, friend_id: 2 },
        FriendLink { id: 1, friend_id: 3 },
        FriendLink { id: 1, friend_id: 2 },
        FriendLink { id: 4, friend_id: 3 },
    ]
}
