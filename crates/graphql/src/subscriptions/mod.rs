//! GraphQL subscription resolvers.
//!
//! Subscriptions bridge from the gateway's broadcast channel. Each stream
//! filters events by name, decodes the payload, and applies the resolver's
//! own predicate before yielding. Undecodable payloads are skipped; events
//! published before the receiver registered are never replayed.

use std::sync::Arc;

use {
    async_graphql::{Context, Result, Subscription},
    tokio_stream::Stream,
};

use crate::{context::GqlContext, events, types::KillResult};

/// Root subscription type.
#[derive(Default)]
pub struct SubscriptionRoot;

#[Subscription(rename_args = "snake_case")]
impl SubscriptionRoot {
    /// Kill announcements for one user. Only events whose `user_id` matches
    /// the argument are delivered; everything else on the bus is dropped
    /// before it reaches the client.
    async fn character_killed(
        &self,
        ctx: &Context<'_>,
        user_id: i64,
    ) -> Result<impl Stream<Item = KillResult>> {
        let c = ctx.data::<Arc<GqlContext>>()?;
        let mut rx = c.subscribe();
        Ok(async_stream::stream! {
            while let Ok((name, payload)) = rx.recv().await {
                if name == events::CHARACTER_KILLED
                    && let Ok(evt) = serde_json::from_value::<KillResult>(payload)
                    && evt.user_id == user_id
                {
                    yield evt;
                }
            }
        })
    }
}
