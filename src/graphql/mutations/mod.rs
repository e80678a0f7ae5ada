// Mutations split by the entity they act on, merged into one root.

mod auth;
mod todo;

use async_graphql::*;

#[derive(Default, MergedObject)]
pub struct Mutation(pub auth::AuthMutation, pub todo::TodoMutation);
