use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    application::{error::ApplicationError, repositories::session_repository::SessionRepository},
    domain::models::session::SessionToken,
};

/// Process-local token store; nothing survives a restart.
#[derive(Default)]
pub struct InMemorySessionRepository {
    token: Mutex<Option<SessionToken>>,
}

impl InMemorySessionRepository {
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<SessionToken>>, ApplicationError> {
        self.token
            .lock()
            .map_err(|_| ApplicationError::InternalError("Session store lock poisoned".to_string()))
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get_token(&self) -> Result<Option<SessionToken>, ApplicationError> {
        Ok(self.slot()?.clone())
    }

    async fn set_token(&self, token: &SessionToken) -> Result<(), ApplicationError> {
        *self.slot()? = Some(token.clone());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), ApplicationError> {
        *self.slot()? = None;
        Ok(())
    }
}
