use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record type of a transaction, parsed from the raw `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Xp,
    Up,
    Down,
    /// `skill_<name>`; holds the text after the first underscore.
    Skill(String),
    Other(String),
}

impl TransactionKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "xp" => TransactionKind::Xp,
            "up" => TransactionKind::Up,
            "down" => TransactionKind::Down,
            _ => match raw.split_once('_') {
                Some(("skill", name)) if !name.is_empty() => {
                    TransactionKind::Skill(name.to_string())
                }
                _ => TransactionKind::Other(raw.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: i64,
    pub path: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::parse(&self.transaction_type)
    }

    /// True for any type whose name contains `xp`, not only the plain `xp` kind.
    pub fn mentions_xp(&self) -> bool {
        self.transaction_type.contains("xp")
    }

    /// Amount as a byte count; negative amounts count as zero.
    pub fn bytes(&self) -> u64 {
        u64::try_from(self.amount).unwrap_or(0)
    }

    /// Fourth `/`-separated element of the path, e.g. `go-reloaded` in
    /// `/johvi/div-01/go-reloaded`.
    pub fn task_name(&self) -> Option<&str> {
        self.path.split('/').nth(3).filter(|name| !name.is_empty())
    }
}
