//! View structures for the presentation layer

use serde::{Deserialize, Serialize};

use super::filter::FrequencySet;
use super::models::{
    BalanceSummary, Breakdown, FilteredEntry, MonthlyTotal, Period, SelectOption, StatusMessage,
    WalletCard,
};
use super::types::ListKind;

/// Everything the dashboard page renders for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub period: Period,
    pub months: Vec<SelectOption>,
    pub years: Vec<SelectOption>,
    /// Balance, gains and expenses cards, in that order
    pub cards: Vec<WalletCard>,
    pub summary: BalanceSummary,
    pub message: StatusMessage,
    pub breakdown: Breakdown,
    pub history: Vec<MonthlyTotal>,
    /// History line colors: gains, expenses
    pub history_colors: (String, String),
}

/// Everything a transaction list page renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListView {
    pub kind: ListKind,
    pub title: String,
    pub line_color: String,
    pub period: Period,
    pub months: Vec<SelectOption>,
    pub years: Vec<SelectOption>,
    /// Frequencies currently visible
    pub frequencies: FrequencySet,
    pub entries: Vec<FilteredEntry>,
}
