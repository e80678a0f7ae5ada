use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::GqlResultExt;
use crate::graphql::types::User;

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Register a new user. Fails when the email is already taken.
    ///
    /// The password is accepted for compatibility but never stored or checked.
    async fn signup(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        password: String,
    ) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        let user = context.app().signup(name, email, password).await.gql()?;

        Ok(User::from(user))
    }

    /// Look up a user by email. The password is not verified.
    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        let user = context.app().login(&email, &password).await.gql()?;

        Ok(User::from(user))
    }
}
