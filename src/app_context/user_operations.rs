use super::AppContext;
use crate::document::User;
use crate::errors::CoreError;

impl AppContext {
    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.snapshot().await?.users)
    }

    /// Register a user. The password is accepted and discarded: nothing is
    /// stored or checked.
    pub async fn signup(
        &self,
        name: String,
        email: String,
        _password: String,
    ) -> Result<User, CoreError> {
        let user = self.mutate(|doc| doc.signup(name, email)).await?;
        tracing::info!("User {} signed up", user.id);
        Ok(user)
    }

    /// Look a user up by email. The password is not verified.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User, CoreError> {
        self.snapshot().await?.login(email)
    }
}
