use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    application::{
        services::{AuthService, ProfileService},
        session_gate::SessionGate,
    },
    domain::config::track::TrackRules,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub session_gate: SessionGate,
    pub auth_service: Arc<dyn AuthService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub track_rules: Arc<TrackRules>,
    pub git_base_url: String,
}
