use async_graphql::*;

use crate::document;

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
}

impl From<document::User> for User {
    fn from(user: document::User) -> Self {
        Self {
            id: ID(user.id),
            name: user.name,
            email: user.email,
        }
    }
}
