use async_graphql::*;

use crate::document;

#[derive(SimpleObject, Clone, Debug)]
pub struct Todo {
    pub id: ID,
    pub text: String,
    pub user_id: ID,
    pub completed: bool,
}

impl From<document::Todo> for Todo {
    fn from(todo: document::Todo) -> Self {
        Self {
            id: ID(todo.id),
            text: todo.text,
            user_id: ID(todo.user_id),
            completed: todo.completed,
        }
    }
}
