use axum::{routing::get, Router};

use crate::adapters::{
    controllers::{auth_controller::AuthController, dashboard_controller::DashboardController},
    state::AppState,
};

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(AuthController::login_page))
        .route(
            "/login",
            get(AuthController::login_page).post(AuthController::sign_in),
        )
        .route(
            "/logout",
            get(AuthController::logout).post(AuthController::logout),
        )
        .route("/dashboard", get(DashboardController::dashboard_page))
        .route("/api/dashboard", get(DashboardController::dashboard_data))
        .with_state(app_state)
}
