mod auth_service;
mod profile_service;

pub use auth_service::AuthService;
pub use profile_service::ProfileService;
