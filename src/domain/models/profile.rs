use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::models::transaction::Transaction;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAttrs {
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub attrs: Option<UserAttrs>,
    #[serde(rename = "totalUp", default)]
    pub total_up: u64,
    #[serde(rename = "totalDown", default)]
    pub total_down: u64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl UserProfile {
    /// `firstName lastName`, falling back to the login when both are absent.
    pub fn full_name(&self) -> String {
        let attrs = self.attrs.as_ref();
        let parts: Vec<&str> = [
            attrs.and_then(|a| a.first_name.as_deref()),
            attrs.and_then(|a| a.last_name.as_deref()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            self.login.clone()
        } else {
            parts.join(" ")
        }
    }

    pub fn email(&self) -> &str {
        self.attrs
            .as_ref()
            .and_then(|a| a.email.as_deref())
            .unwrap_or_default()
    }
}
