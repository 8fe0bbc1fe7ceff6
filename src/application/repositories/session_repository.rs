use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::session::SessionToken};

/// Storage for the single persisted session token.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the stored token, or `None` when nothing is stored.
    async fn get_token(&self) -> Result<Option<SessionToken>, ApplicationError>;

    /// Stores `token`, replacing any previous one.
    async fn set_token(&self, token: &SessionToken) -> Result<(), ApplicationError>;

    /// Removes the stored token. Clearing an empty store is not an error.
    async fn clear_token(&self) -> Result<(), ApplicationError>;
}
