//! Basic enumerations for the dashboard core

use serde::{Deserialize, Serialize};

/// Which record set a transaction list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Income records ("Entradas")
    Gains,
    /// Expense records ("Saídas")
    Expenses,
}

impl ListKind {
    /// Route value used by the presentation layer
    pub fn route(&self) -> &'static str {
        match self {
            ListKind::Gains => "entry-balance",
            ListKind::Expenses => "exit-balance",
        }
    }

    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Gains => "Entradas",
            ListKind::Expenses => "Saídas",
        }
    }
}

impl std::str::FromStr for ListKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entry-balance" | "gains" => Ok(ListKind::Gains),
            "exit-balance" | "expenses" => Ok(ListKind::Expenses),
            _ => Err(format!("Invalid list type: {}", s)),
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Gains => write!(f, "gains"),
            ListKind::Expenses => write!(f, "expenses"),
        }
    }
}

/// Mood of the monthly status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Spent more than earned
    Sad,
    /// Spent exactly what was earned
    Neutral,
    /// Positive balance
    Happy,
}

impl Mood {
    /// Icon shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Sad => "sad",
            Mood::Neutral => "grinning",
            Mood::Happy => "happy",
        }
    }
}

/// Icon of a wallet card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletIcon {
    #[serde(rename = "dollar")]
    Dollar,
    #[serde(rename = "arrowUp")]
    ArrowUp,
    #[serde(rename = "arrowDown")]
    ArrowDown,
}

impl WalletIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletIcon::Dollar => "dollar",
            WalletIcon::ArrowUp => "arrowUp",
            WalletIcon::ArrowDown => "arrowDown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_from_str() {
        assert_eq!("entry-balance".parse::<ListKind>().unwrap(), ListKind::Gains);
        assert_eq!("exit-balance".parse::<ListKind>().unwrap(), ListKind::Expenses);
        assert_eq!("Gains".parse::<ListKind>().unwrap(), ListKind::Gains);
        assert!("balance".parse::<ListKind>().is_err());
    }

    #[test]
    fn test_list_kind_route_roundtrip() {
        for kind in [ListKind::Gains, ListKind::Expenses] {
            assert_eq!(kind.route().parse::<ListKind>().unwrap(), kind);
        }
        assert_eq!(ListKind::Expenses.title(), "Saídas");
    }

    #[test]
    fn test_mood_icons() {
        assert_eq!(Mood::Sad.icon(), "sad");
        assert_eq!(Mood::Neutral.icon(), "grinning");
        assert_eq!(Mood::Happy.icon(), "happy");
    }

    #[test]
    fn test_wallet_icon_serde() {
        assert_eq!(serde_json::to_string(&WalletIcon::ArrowUp).unwrap(), "\"arrowUp\"");
        assert_eq!(WalletIcon::ArrowDown.as_str(), "arrowDown");
    }
}
