use std::{net::IpAddr, path::PathBuf, time::Duration};

use crate::domain::config::{error::ConfigError, track::TrackRules};

const DEFAULT_API_BASE_URL: &str = "https://01.kood.tech";
const DEFAULT_SESSION_FILE: &str = ".xp-board/session.json";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: IpAddr,
    pub port: u16,
    /// Origin hosting both the sign-in and GraphQL endpoints.
    pub api_base_url: String,
    /// Base for the profile link, `<git_base_url>/<login>`.
    pub git_base_url: String,
    pub session_file: PathBuf,
    /// `None` leaves outgoing requests without a timeout.
    pub request_timeout: Option<Duration>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub track_rules: TrackRules,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_host = match lookup("BIND_HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue { key: "BIND_HOST", value })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => 8080,
        };

        let api_base_url = lookup("API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if api_base_url.is_empty() {
            return Err(ConfigError::Empty("API_BASE_URL"));
        }

        let git_base_url = lookup("GIT_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("{}/git", api_base_url));

        let session_file = lookup("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "REQUEST_TIMEOUT_SECS",
                    value,
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS").map(|origins| split_list(&origins));

        let defaults = TrackRules::default();
        let track = lookup("TRACK_PREFIX").unwrap_or(defaults.track);
        if track.trim_matches('/').is_empty() {
            return Err(ConfigError::Empty("TRACK_PREFIX"));
        }
        let total_excluded = lookup("TOTAL_XP_EXCLUDED")
            .map(|list| split_list(&list))
            .unwrap_or(defaults.total_excluded);
        let series_excluded = lookup("SERIES_EXCLUDED")
            .map(|list| split_list(&list))
            .unwrap_or(defaults.series_excluded);

        Ok(Self {
            bind_host,
            port,
            api_base_url,
            git_base_url,
            session_file,
            request_timeout,
            cors_allowed_origins,
            track_rules: TrackRules::new(track, total_excluded, series_excluded),
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.api_base_url, "https://01.kood.tech");
        assert_eq!(config.git_base_url, "https://01.kood.tech/git");
        assert_eq!(config.request_timeout, None);
        assert!(config.cors_allowed_origins.is_none());
        assert_eq!(config.track_rules, TrackRules::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("API_BASE_URL", "http://localhost:4000/"),
            ("REQUEST_TIMEOUT_SECS", "15"),
            ("TRACK_PREFIX", "/school/main"),
            ("TOTAL_XP_EXCLUDED", "trial, , bootcamp"),
            ("SERIES_EXCLUDED", "trial"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test,http://b.test"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.git_base_url, "http://localhost:4000/git");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.track_rules.track, "/school/main");
        assert_eq!(
            config.track_rules.total_excluded,
            vec!["trial".to_string(), "bootcamp".to_string()]
        );
        assert_eq!(config.cors_allowed_origins.map(|o| o.len()), Some(2));
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn rejects_root_track() {
        let err = config_from(&[("TRACK_PREFIX", "/")]).unwrap_err();
        assert!(matches!(err, ConfigError::Empty("TRACK_PREFIX")));
    }
}
