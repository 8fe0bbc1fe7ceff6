use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    adapters::{
        dto::login_dto::LoginForm,
        views::login::{self, LoginNotice},
    },
    application::{
        error::ApplicationError,
        services::AuthService,
        session_gate::{GateDecision, SessionGate, View},
    },
};

pub struct AuthController;

impl AuthController {
    /// GET / and GET /login
    pub async fn login_page(
        State(session_gate): State<SessionGate>,
    ) -> Result<Response, ApplicationError> {
        match session_gate.enter(View::Login).await? {
            GateDecision::Redirect(target) => Ok(Redirect::to(target.path()).into_response()),
            GateDecision::Render(_) => Ok(Html(login::render(None, "")).into_response()),
        }
    }

    /// POST /login
    pub async fn sign_in(
        State(session_gate): State<SessionGate>,
        State(auth_service): State<Arc<dyn AuthService>>,
        Form(form): Form<LoginForm>,
    ) -> Result<Response, ApplicationError> {
        let email = form.email.trim();
        if email.is_empty() || form.password.is_empty() {
            warn!("Sign-in submitted with missing fields");
            return Ok(Self::login_with_notice(
                StatusCode::BAD_REQUEST,
                LoginNotice::MissingFields,
                email,
            ));
        }

        info!("Signing in as {}", email);

        match auth_service.sign_in(email, &form.password).await {
            Ok(token) => match session_gate.sign_in(&token).await {
                Ok(next) => Ok(Redirect::to(next.path()).into_response()),
                Err(ApplicationError::AuthFailed(msg)) => {
                    warn!("Sign-in rejected for {}: {}", email, msg);
                    Ok(Self::login_with_notice(
                        StatusCode::UNAUTHORIZED,
                        LoginNotice::InvalidCredentials,
                        email,
                    ))
                }
                Err(e) => Err(e),
            },
            Err(ApplicationError::AuthFailed(msg)) => {
                warn!("Sign-in rejected for {}: {}", email, msg);
                Ok(Self::login_with_notice(
                    StatusCode::UNAUTHORIZED,
                    LoginNotice::InvalidCredentials,
                    email,
                ))
            }
            Err(e) => {
                error!("Sign-in failed for {}: {:?}", email, e);
                Ok(Self::login_with_notice(
                    StatusCode::BAD_GATEWAY,
                    LoginNotice::Unavailable,
                    email,
                ))
            }
        }
    }

    /// GET|POST /logout
    pub async fn logout(
        State(session_gate): State<SessionGate>,
    ) -> Result<Redirect, ApplicationError> {
        let next = session_gate.logout().await?;
        Ok(Redirect::to(next.path()))
    }

    fn login_with_notice(status: StatusCode, notice: LoginNotice, email: &str) -> Response {
        (status, Html(login::render(Some(notice), email))).into_response()
    }
}
