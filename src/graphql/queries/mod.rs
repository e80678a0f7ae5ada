use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::GqlResultExt;
use crate::graphql::types::{Todo, User};

pub const GREETING: &str = "Hello from the todoql GraphQL API!";

pub struct Query;

#[Object]
impl Query {
    /// Liveness check
    async fn hello(&self) -> String {
        GREETING.to_string()
    }

    /// Every registered user, in signup order
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let users = context.app().list_users().await.gql()?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Todos owned by a user, in the order they were added
    async fn todos(&self, ctx: &Context<'_>, user_id: ID) -> Result<Vec<Todo>> {
        let context = ctx.data::<GraphQLContext>()?;
        let todos = context.app().list_todos(&user_id).await.gql()?;

        Ok(todos.into_iter().map(Todo::from).collect())
    }
}
