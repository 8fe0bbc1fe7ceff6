use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeUnit {
    #[serde(rename = "Bytes")]
    Bytes,
    #[serde(rename = "KB")]
    Kilobytes,
    #[serde(rename = "MB")]
    Megabytes,
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SizeUnit::Bytes => "Bytes",
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
        };
        f.write_str(label)
    }
}

/// Byte count scaled for display, amount rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeValue {
    pub amount: f64,
    pub unit: SizeUnit,
}

impl SizeValue {
    pub fn new(amount: f64, unit: SizeUnit) -> Self {
        Self { amount, unit }
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
