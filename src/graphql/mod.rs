pub mod context;
pub mod errors;
pub mod mutations;
pub mod queries;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

use crate::app_context::AppContext;

pub use context::GraphQLContext;

pub type TodoqlSchema = Schema<queries::Query, mutations::Mutation, EmptySubscription>;

pub fn build_schema(app: AppContext) -> TodoqlSchema {
    Schema::build(
        queries::Query,
        mutations::Mutation::default(),
        EmptySubscription,
    )
    .data(GraphQLContext::new(app))
    .finish()
}
