use std::fmt;

use serde::Serialize;

/// Audits given over audits received, rounded to one decimal.
///
/// `Undefined` stands in for a ratio with nothing received, which would
/// otherwise be infinite or NaN. It serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum AuditRatio {
    Defined(f64),
    Undefined,
}

impl From<AuditRatio> for Option<f64> {
    fn from(value: AuditRatio) -> Self {
        match value {
            AuditRatio::Defined(ratio) => Some(ratio),
            AuditRatio::Undefined => None,
        }
    }
}

impl fmt::Display for AuditRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditRatio::Defined(ratio) => write!(f, "{:.1}", ratio),
            AuditRatio::Undefined => f.write_str("N/A"),
        }
    }
}

/// Raw audit counters feeding the pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditSplit {
    pub given: u64,
    pub received: u64,
}
