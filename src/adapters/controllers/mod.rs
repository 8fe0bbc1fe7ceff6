pub mod auth_controller;
pub mod dashboard_controller;
