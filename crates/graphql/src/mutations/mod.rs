//! GraphQL mutation resolvers.

use std::sync::Arc;

use {
    async_graphql::{Context, Object, Result},
    serde_json::json,
};

use crate::{context::GqlContext, error::ResolverError, events, types::User};

/// Root mutation type.
#[derive(Default)]
pub struct MutationRoot;

#[Object(rename_args = "snake_case")]
impl MutationRoot {
    /// Look up a user by exact email match. The password is accepted but
    /// never checked; no credential enforcement exists anywhere in the
    /// demo. Unknown emails resolve to null.
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        #[graphql(name = "password")] _password: String,
    ) -> Result<Option<User>> {
        let c = ctx.data::<Arc<GqlContext>>()?;
        Ok(c.store.user_by_email(&email).cloned().map(User::from))
    }

    /// Kill the user with `user_id` and announce it on the event bus.
    /// Publishing with no listeners still succeeds.
    async fn kill(&self, ctx: &Context<'_>, user_id: i64) -> Result<String> {
        let c = ctx.data::<Arc<GqlContext>>()?;
        let user = c
            .store
            .user_by_id(user_id)
            .ok_or(ResolverError::UnknownUser(user_id))?;
        c.publish(events::CHARACTER_KILLED, json!({ "user_id": user.id }));
        Ok(format!(
            "{} {} has been killed. We wish you fortune in the wars to come.",
            user.first_name, user.last_name
        ))
    }
}
