use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    application::{error::ApplicationError, repositories::session_repository::SessionRepository},
    domain::models::session::SessionToken,
};

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: SessionToken,
}

/// Keeps the session token in a small JSON file so it survives restarts.
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn get_token(&self) -> Result<Option<SessionToken>, ApplicationError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ApplicationError::InternalError(format!(
                    "Failed to read session file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => Ok(Some(stored.token)),
            Err(e) => {
                // unreadable file is treated as signed out
                debug!("Ignoring malformed session file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    async fn set_token(&self, token: &SessionToken) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::InternalError(format!(
                    "Failed to create session directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let body = serde_json::to_string(&StoredSession {
            token: token.clone(),
        })
        .map_err(|e| ApplicationError::InternalError(format!("Failed to encode session: {}", e)))?;

        tokio::fs::write(&self.path, body).await.map_err(|e| {
            ApplicationError::InternalError(format!(
                "Failed to write session file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        info!("Session token stored at {}", self.path.display());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), ApplicationError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("Session file {} removed", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::InternalError(format!(
                "Failed to remove session file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
