//! The persisted aggregate and the in-memory transitions applied to it.
//!
//! Every mutation in the API is expressed here as a pure change to a
//! [`Document`] value. Loading and saving the document is the job of
//! [`crate::store`]; sequencing load, change and save is the job of
//! [`crate::app_context::AppContext`].

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Documents written before names were required may lack one.
    #[serde(default)]
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub user_id: String,
    #[serde(default)]
    pub completed: bool,
}

/// Every user and todo known to the service, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl Document {
    /// Todos owned by `user_id`, in document order.
    pub fn todos_for(&self, user_id: &str) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| todo.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Append a new user unless the email is already registered.
    pub fn signup(&mut self, name: String, email: String) -> Result<User, CoreError> {
        if self.find_user_by_email(&email).is_some() {
            return Err(CoreError::already_exists("User", email));
        }

        let user = User {
            id: ids::generate_id(),
            name,
            email,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn login(&self, email: &str) -> Result<User, CoreError> {
        self.find_user_by_email(email)
            .cloned()
            .ok_or_else(|| CoreError::not_found("User", "email", email))
    }

    /// Append a todo for `user_id`. The owner is not checked against `users`.
    pub fn add_todo(&mut self, user_id: String, text: String) -> Todo {
        let todo = Todo {
            id: ids::generate_id(),
            text,
            user_id,
            completed: false,
        };
        self.todos.push(todo.clone());
        todo
    }

    /// Drop every todo with `id`. Returns how many were removed.
    pub fn delete_todo(&mut self, id: &str) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        before - self.todos.len()
    }

    pub fn toggle_todo_completed(&mut self, id: &str) -> Result<Todo, CoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| CoreError::not_found("Todo", "id", id))?;

        todo.completed = !todo.completed;
        Ok(todo.clone())
    }
}
