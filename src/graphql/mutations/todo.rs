use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::GqlResultExt;
use crate::graphql::types::Todo;

#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    /// Add a todo for a user. The user id is not validated.
    async fn add_todo(&self, ctx: &Context<'_>, user_id: ID, text: String) -> Result<Todo> {
        let context = ctx.data::<GraphQLContext>()?;
        let todo = context.app().add_todo(user_id.0, text).await.gql()?;

        Ok(Todo::from(todo))
    }

    /// Delete a todo. Returns true even when no todo had this id.
    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context.app().delete_todo(&id).await.gql()
    }

    async fn toggle_todo_completed(&self, ctx: &Context<'_>, id: ID) -> Result<Todo> {
        let context = ctx.data::<GraphQLContext>()?;
        let todo = context.app().toggle_todo_completed(&id).await.gql()?;

        Ok(Todo::from(todo))
    }
}
