use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::{
    application::{
        error::ApplicationError,
        services::{AuthService, ProfileService},
    },
    domain::models::{profile::UserProfile, session::SessionToken},
    services::error::ApiError,
};

const SIGN_IN_PATH: &str = "/api/auth/signin";
const GRAPHQL_PATH: &str = "/api/graphql-engine/v1/graphql";

pub const PROFILE_QUERY: &str = r#"
query {
    user {
        id
        login
        attrs
        totalUp
        totalDown
        transactions(order_by: { createdAt: asc }) {
            id
            type
            amount
            path
            createdAt
        }
    }
}
"#;

/// Sign-in answers with either a bare JSON string token or `{"error": ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignInResponse {
    Token(String),
    Failure { error: String },
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<UserData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct UserData {
    #[serde(default)]
    user: Vec<UserProfile>,
}

/// Client for the identity service and its GraphQL engine.
pub struct KoodApiClient {
    client: Client,
    base_url: String,
}

impl KoodApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::from)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request_sign_in(&self, email: &str, password: &str) -> Result<SessionToken, ApiError> {
        let response = self
            .client
            .post(self.endpoint(SIGN_IN_PATH))
            .header(header::CONTENT_TYPE, "application/json")
            .basic_auth(email, Some(password))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        match serde_json::from_str::<SignInResponse>(&body) {
            Ok(SignInResponse::Failure { error }) => Err(ApiError::InvalidCredentials(error)),
            _ if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => Err(
                ApiError::InvalidCredentials(format!("sign-in returned {}", status)),
            ),
            _ if !status.is_success() => Err(ApiError::ProviderError(format!(
                "Sign-in failed with status: {}",
                status
            ))),
            Ok(SignInResponse::Token(token)) if token.trim().is_empty() => {
                Err(ApiError::InvalidCredentials("empty token".to_string()))
            }
            Ok(SignInResponse::Token(token)) => Ok(SessionToken::new(token)),
            Err(e) => Err(ApiError::DecodeError(format!("sign-in body: {}", e))),
        }
    }

    async fn request_profile(&self, token: &SessionToken) -> Result<UserProfile, ApiError> {
        let response = self
            .client
            .post(self.endpoint(GRAPHQL_PATH))
            .bearer_auth(token.as_str())
            .json(&json!({ "query": PROFILE_QUERY }))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized(format!(
                "GraphQL returned {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(ApiError::ProviderError(format!(
                "GraphQL request failed with status: {}",
                status
            )));
        }

        let payload: GraphQlResponse = response.json().await.map_err(ApiError::from)?;

        if !payload.errors.is_empty() {
            let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
            return Err(ApiError::GraphQlError(messages.join("; ")));
        }

        let data = payload
            .data
            .ok_or_else(|| ApiError::DecodeError("response has no data".to_string()))?;

        data.user.into_iter().next().ok_or(ApiError::MissingUser)
    }
}

#[async_trait]
impl AuthService for KoodApiClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionToken, ApplicationError> {
        debug!("POST {}", SIGN_IN_PATH);
        match self.request_sign_in(email, password).await {
            Ok(token) => {
                info!("Sign-in accepted");
                Ok(token)
            }
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl ProfileService for KoodApiClient {
    async fn fetch_profile(&self, token: &SessionToken) -> Result<UserProfile, ApplicationError> {
        debug!("POST {}", GRAPHQL_PATH);
        match self.request_profile(token).await {
            Ok(profile) => Ok(profile),
            Err(e) => {
                warn!("Profile fetch failed: {}", e);
                Err(e.into())
            }
        }
    }
}
