use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    application::{error::ApplicationError, repositories::session_repository::SessionRepository},
    domain::models::session::SessionToken,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(SessionToken),
}

impl SessionState {
    /// Where a visitor in this state must be sent instead of `view`, if anywhere.
    pub fn redirect_for(&self, view: View) -> Option<View> {
        match (self, view) {
            (SessionState::Anonymous, View::Dashboard) => Some(View::Login),
            (SessionState::Authenticated(_), View::Login) => Some(View::Dashboard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Render(SessionState),
    Redirect(View),
}

/// Decides which view a visitor may see, based on the stored token.
///
/// A stored token is trusted as-is: it is only found to be stale when a
/// later profile fetch fails.
#[derive(Clone)]
pub struct SessionGate {
    repository: Arc<dyn SessionRepository>,
}

impl SessionGate {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn state(&self) -> Result<SessionState, ApplicationError> {
        let state = match self.repository.get_token().await? {
            Some(token) if !token.is_blank() => SessionState::Authenticated(token),
            _ => SessionState::Anonymous,
        };
        Ok(state)
    }

    pub async fn enter(&self, view: View) -> Result<GateDecision, ApplicationError> {
        let state = self.state().await?;
        match state.redirect_for(view) {
            Some(target) => {
                debug!("Redirecting {:?} to {:?}", view, target);
                Ok(GateDecision::Redirect(target))
            }
            None => Ok(GateDecision::Render(state)),
        }
    }

    /// Anonymous -> Authenticated.
    pub async fn sign_in(&self, token: &SessionToken) -> Result<View, ApplicationError> {
        if token.is_blank() {
            return Err(ApplicationError::AuthFailed(
                "identity service returned an empty token".to_string(),
            ));
        }
        self.repository.set_token(token).await?;
        info!("Session started");
        Ok(View::Dashboard)
    }

    /// Authenticated -> Anonymous.
    pub async fn logout(&self) -> Result<View, ApplicationError> {
        self.repository.clear_token().await?;
        info!("Session cleared");
        Ok(View::Login)
    }
}
