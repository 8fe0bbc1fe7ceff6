use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use tracing::{error, info};

use crate::{
    adapters::{state::AppState, views::dashboard},
    application::{
        dto::dashboard_dto::DashboardDTO,
        error::ApplicationError,
        session_gate::{GateDecision, SessionState, View},
    },
};

pub struct DashboardController;

impl DashboardController {
    /// GET /dashboard
    ///
    /// A failed profile load is logged and the page is served without data.
    pub async fn dashboard_page(
        State(app_state): State<AppState>,
    ) -> Result<Response, ApplicationError> {
        let token = match app_state.session_gate.enter(View::Dashboard).await? {
            GateDecision::Render(SessionState::Authenticated(token)) => token,
            GateDecision::Redirect(target) => return Ok(Redirect::to(target.path()).into_response()),
            GateDecision::Render(SessionState::Anonymous) => {
                return Ok(Redirect::to(View::Login.path()).into_response())
            }
        };

        let view = match app_state.profile_service.fetch_profile(&token).await {
            Ok(profile) => {
                info!(
                    "Loaded profile {} with {} transactions",
                    profile.login,
                    profile.transactions.len()
                );
                Some(DashboardDTO::from_profile(
                    &profile,
                    &app_state.track_rules,
                    &app_state.git_base_url,
                ))
            }
            Err(e) => {
                error!("Error fetching data: {:?}", e);
                None
            }
        };

        Ok(Html(dashboard::render(view.as_ref())).into_response())
    }

    /// GET /api/dashboard
    pub async fn dashboard_data(
        State(app_state): State<AppState>,
    ) -> Result<Json<DashboardDTO>, ApplicationError> {
        let token = match app_state.session_gate.state().await? {
            SessionState::Authenticated(token) => token,
            SessionState::Anonymous => return Err(ApplicationError::Unauthorized),
        };

        let profile = app_state.profile_service.fetch_profile(&token).await?;
        Ok(Json(DashboardDTO::from_profile(
            &profile,
            &app_state.track_rules,
            &app_state.git_base_url,
        )))
    }
}
