//! GraphQL output types.
//!
//! `User` wraps a store record and projects its `friends` per request; the
//! store itself is never annotated or mutated. `KillResult` doubles as the
//! broadcast payload shape and is deserialized straight off the bus.

use std::{collections::BTreeSet, sync::Arc};

use {
    async_graphql::{Context, Object, Result, SimpleObject},
    serde::Deserialize,
    westeros_store::{FixtureStore, UserRecord},
};

use crate::context::GqlContext;

/// A roster member. Only the name fields and the friends projection are
/// exposed; `id` and `email_address` stay internal to the store.
#[derive(Debug, Clone)]
pub struct User {
    record: UserRecord,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self { record }
    }
}

#[Object(rename_fields = "snake_case")]
impl User {
    async fn first_name(&self) -> &str {
        &self.record.first_name
    }

    async fn last_name(&self) -> &str {
        &self.record.last_name
    }

    /// Friends of this user, fixture order, duplicate edges collapsed.
    /// Resolved lazily per request, so nested `friends { friends }`
    /// selections are well-defined at any depth.
    async fn friends(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let c = ctx.data::<Arc<GqlContext>>()?;
        Ok(friends_of(&c.store, self.record.id))
    }
}

/// One kill announcement as carried on the event bus.
#[derive(Debug, Clone, SimpleObject, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct KillResult {
    pub user_id: i64,
}

/// Project the friends of `user_id`: collect the targets of matching links
/// into an ordered set (the fixture carries a duplicate edge), then scan
/// the roster in fixture order for members of that set.
fn friends_of(store: &FixtureStore, user_id: i64) -> Vec<User> {
    let friend_ids: BTreeSet<i64> = store
        .friend_links()
        .iter()
        .filter(|l| l.id == user_id)
        .map(|l| l.friend_id)
        .collect();
    store
        .users()
        .iter()
        .filter(|u| friend_ids.contains(&u.id))
        .cloned()
        .map(User::from)
        .collect()
}
