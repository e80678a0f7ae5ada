use super::AppContext;
use crate::document::Todo;
use crate::errors::CoreError;

impl AppContext {
    pub async fn list_todos(&self, user_id: &str) -> Result<Vec<Todo>, CoreError> {
        Ok(self.snapshot().await?.todos_for(user_id))
    }

    pub async fn add_todo(&self, user_id: String, text: String) -> Result<Todo, CoreError> {
        let todo = self.mutate(|doc| Ok(doc.add_todo(user_id, text))).await?;
        tracing::debug!("Added todo {} for user {}", todo.id, todo.user_id);
        Ok(todo)
    }

    /// Always `true` once saved, whether or not a todo matched.
    pub async fn delete_todo(&self, id: &str) -> Result<bool, CoreError> {
        let removed = self.mutate(|doc| Ok(doc.delete_todo(id))).await?;
        tracing::debug!("Deleted {} todo(s) with id {}", removed, id);
        Ok(true)
    }

    pub async fn toggle_todo_completed(&self, id: &str) -> Result<Todo, CoreError> {
        self.mutate(|doc| doc.toggle_todo_completed(id)).await
    }
}
