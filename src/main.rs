use std::{net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;
use xp_board::{
    adapters::{repositories::FileSessionRepository, router::build_router, state::AppState},
    application::{
        repositories::session_repository::SessionRepository,
        services::{AuthService, ProfileService},
        session_gate::SessionGate,
    },
    domain::config::app::AppConfig,
    services,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("ERROR: Invalid configuration");

    tracing::info!(
        "Starting xp-board against {} (track {})",
        config.api_base_url,
        config.track_rules.track
    );

    // Configure CORS
    let cors = match &config.cors_allowed_origins {
        Some(allowed_origins) => {
            let origins: Vec<HeaderValue> = allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    };

    let api_client =
        services::create_api_client(&config).expect("ERROR: Failed to build HTTP client");

    let session_repo = Arc::new(FileSessionRepository::new(config.session_file.clone()))
        as Arc<dyn SessionRepository>;

    let app_state = AppState {
        session_gate: SessionGate::new(session_repo),
        auth_service: api_client.clone() as Arc<dyn AuthService>,
        profile_service: api_client as Arc<dyn ProfileService>,
        track_rules: Arc::new(config.track_rules.clone()),
        git_base_url: config.git_base_url.clone(),
    };

    let router = build_router(app_state).layer(cors);

    let addr = SocketAddr::new(config.bind_host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to port");

    tracing::info!("Dashboard available at http://{}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
