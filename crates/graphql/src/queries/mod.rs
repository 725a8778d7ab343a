//! GraphQL query resolvers.

use std::{collections::BTreeSet, sync::Arc};

use async_graphql::{Context, Object, Result};

use crate::{context::GqlContext, types::User};

/// Root query type.
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Roster members whose id appears in `id`, fixture order. Unknown and
    /// repeated ids are ignored; an empty list yields an empty result. The
    /// argument itself is required, so omitting it fails validation instead
    /// of silently matching nothing.
    async fn users(&self, ctx: &Context<'_>, id: Vec<i64>) -> Result<Vec<User>> {
        let c = ctx.data::<Arc<GqlContext>>()?;
        let wanted: BTreeSet<i64> = id.into_iter().collect();
        Ok(c.store
            .users()
            .iter()
            .filter(|u| wanted.contains(&u.id))
            .cloned()
            .map(User::from)
            .collect())
    }
}
