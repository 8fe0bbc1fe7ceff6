mod error;
mod kood_api_client;

pub use error::ApiError;
pub use kood_api_client::{KoodApiClient, PROFILE_QUERY};

use std::sync::Arc;

use crate::domain::config::app::AppConfig;

pub fn create_api_client(config: &AppConfig) -> Result<Arc<KoodApiClient>, ApiError> {
    let client = KoodApiClient::new(&config.api_base_url, config.request_timeout)?;
    Ok(Arc::new(client))
}
