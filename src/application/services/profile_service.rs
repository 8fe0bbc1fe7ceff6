use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::{profile::UserProfile, session::SessionToken},
};

#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Loads the signed-in user with transactions ascending by creation time.
    async fn fetch_profile(&self, token: &SessionToken) -> Result<UserProfile, ApplicationError>;
}
