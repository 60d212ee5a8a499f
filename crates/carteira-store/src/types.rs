//! Record types shared by the store and the core

use serde::{Deserialize, Serialize};

/// How often a transaction happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// Recurs every month
    #[serde(rename = "recorrente")]
    Recurring,
    /// Happens once
    #[serde(rename = "eventual")]
    Occasional,
}

impl Frequency {
    /// Every recognized frequency, in display order
    pub const ALL: [Frequency; 2] = [Frequency::Recurring, Frequency::Occasional];

    /// Wire value used in record files
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Recurring => "recorrente",
            Frequency::Occasional => "eventual",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recorrente" | "recurring" => Ok(Frequency::Recurring),
            "eventual" | "occasional" => Ok(Frequency::Occasional),
            _ => Err(format!("Invalid frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single gain or expense as stored in the record files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Free-form description
    pub description: String,
    /// Decimal amount kept as text, parsed on every aggregation
    pub amount: String,
    /// Recurring or occasional
    pub frequency: Frequency,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
}

impl TransactionRecord {
    pub fn new(description: &str, amount: &str, frequency: Frequency, date: &str) -> Self {
        Self {
            description: description.to_string(),
            amount: amount.to_string(),
            frequency,
            date: date.to_string(),
        }
    }
}
