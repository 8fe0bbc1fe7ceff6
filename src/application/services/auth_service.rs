use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::session::SessionToken};

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a session token.
    ///
    /// Rejected credentials surface as `ApplicationError::AuthFailed`.
    async fn sign_in(&self, email: &str, password: &str)
        -> Result<SessionToken, ApplicationError>;
}
