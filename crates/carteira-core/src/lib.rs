//! Core wallet processing: period selection, aggregation, list filtering
//! and the view models handed to the presentation layer

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod period;
pub mod session;
pub mod types;
pub mod views;

pub use aggregate::{
    balance_summary, breakdown, monthly_series, monthly_series_at, parse_amount, status_message,
    total_for_period,
};
pub use error::{
    CoreError, CoreResult, DefaultErrorLogger, ErrorCode, ErrorContext, ErrorDetails,
    ErrorLogger, ErrorSeverity,
};
pub use filter::{filter_and_format, toggle_frequency, toggle_frequency_str, FrequencySet};
pub use format::CurrencyFormat;
pub use models::{
    BalanceSummary, Breakdown, BreakdownSlice, FilteredEntry, MonthlyTotal, Period, SelectOption,
    StatusMessage, WalletCard,
};
pub use period::{
    available_years, month_label, month_options, parse_month, parse_year, reconcile_year,
    year_options, MONTH_NAMES,
};
pub use session::{DashboardSession, ListSession, Wallet};
pub use types::{ListKind, Mood, WalletIcon};
pub use views::{DashboardView, ListView};

pub use carteira_store::{Frequency, RecordStore, TransactionRecord};
