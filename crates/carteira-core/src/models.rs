//! Derived data models handed to the presentation layer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use carteira_store::Frequency;

use super::types::{Mood, WalletIcon};

/// Selected month and year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Calendar month, 1-12
    pub month: u32,
    /// Calendar year
    pub year: i32,
}

/// Gains and expenses of one month of the history chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Calendar month, 0-11
    pub month_index: u32,
    /// Three-letter month label
    pub month_label: String,
    pub gains_total: Decimal,
    pub expenses_total: Decimal,
}

/// Totals of the selected period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub total_gains: Decimal,
    pub total_expenses: Decimal,
    /// `total_gains - total_expenses`
    pub balance: Decimal,
}

impl BalanceSummary {
    /// `None` when the balance does not fit in a `Decimal`
    pub fn checked(total_gains: Decimal, total_expenses: Decimal) -> Option<Self> {
        Some(Self {
            total_gains,
            total_expenses,
            balance: total_gains.checked_sub(total_expenses)?,
        })
    }
}

/// One slice of the gains-vs-expenses pie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub value: Decimal,
    /// Share of the combined total, 0-100 with one decimal place
    pub percent: Decimal,
    pub color: String,
}

/// Gains slice first, expenses slice second
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown(pub [BreakdownSlice; 2]);

impl Breakdown {
    pub fn gains(&self) -> &BreakdownSlice {
        &self.0[0]
    }

    pub fn expenses(&self) -> &BreakdownSlice {
        &self.0[1]
    }

    /// Slices in display order
    pub fn slices(&self) -> &[BreakdownSlice] {
        &self.0
    }
}

/// A transaction row of the list page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredEntry {
    /// Unique within one filter pass only
    pub id: String,
    pub description: String,
    pub formatted_amount: String,
    pub frequency: Frequency,
    pub formatted_date: String,
    pub tag_color: String,
}

/// Message box content for the selected period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub title: String,
    pub description: String,
    pub footer_text: String,
    pub mood: Mood,
}

/// A summary card of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletCard {
    pub title: String,
    pub amount: Decimal,
    pub formatted_amount: String,
    pub footer_label: String,
    pub icon: WalletIcon,
    pub color: String,
}

/// Option of a month or year selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: i32,
    pub label: String,
}
