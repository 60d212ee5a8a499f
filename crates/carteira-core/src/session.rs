//! Controllers that recompute views after every selection change

use carteira_config::{Config, PaletteConfig};
use carteira_store::{RecordStore, TransactionRecord};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::aggregate::{balance_summary, breakdown, monthly_series_at, status_message};
use crate::error::{CoreError, CoreResult};
use crate::filter::{filter_and_format, toggle_frequency_str, FrequencySet};
use crate::format::CurrencyFormat;
use crate::models::{Period, WalletCard};
use crate::period::{
    available_years, month_options, parse_month, parse_year, reconcile_year, year_options,
};
use crate::types::{ListKind, WalletIcon};
use crate::views::{DashboardView, ListView};

const CARD_FOOTER: &str = "atualizado com base nas entradas e saídas";

/// Record store plus the display policy
#[derive(Debug, Clone)]
pub struct Wallet {
    store: RecordStore,
    format: CurrencyFormat,
    palette: PaletteConfig,
}

impl Wallet {
    /// Create a wallet with an explicit formatting policy and palette
    pub fn new(store: RecordStore, format: CurrencyFormat, palette: PaletteConfig) -> Self {
        Self {
            store,
            format,
            palette,
        }
    }

    /// Create a wallet using the formatting and palette of `config`
    pub fn from_config(store: RecordStore, config: &Config) -> Self {
        Self::new(
            store,
            CurrencyFormat::from(&config.currency),
            config.palette.clone(),
        )
    }

    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }

    /// Records shown by a list page
    pub fn records(&self, kind: ListKind) -> &[TransactionRecord] {
        match kind {
            ListKind::Gains => self.store.gains(),
            ListKind::Expenses => self.store.expenses(),
        }
    }

    /// Years of the whole store, expenses first
    pub fn dashboard_years(&self) -> CoreResult<Vec<i32>> {
        let mut years = self.list_years(ListKind::Expenses)?;
        for year in self.list_years(ListKind::Gains)? {
            if !years.contains(&year) {
                years.push(year);
            }
        }
        Ok(years)
    }

    /// Years of one list's records
    pub fn list_years(&self, kind: ListKind) -> CoreResult<Vec<i32>> {
        available_years(self.records(kind), &kind.to_string())
    }

    fn card(&self, title: &str, amount: Decimal, icon: WalletIcon, color: &str) -> WalletCard {
        WalletCard {
            title: title.to_string(),
            amount,
            formatted_amount: self.format.format_currency(amount),
            footer_label: CARD_FOOTER.to_string(),
            icon,
            color: color.to_string(),
        }
    }

    /// Compute the dashboard of `period`
    pub fn dashboard(&self, period: Period) -> CoreResult<DashboardView> {
        self.dashboard_at(period, Local::now().date_naive())
    }

    /// Compute the dashboard with `today` as the history cut-off
    pub fn dashboard_at(&self, period: Period, today: NaiveDate) -> CoreResult<DashboardView> {
        log::debug!("Computing dashboard for {}", period);

        let gains = self.store.gains();
        let expenses = self.store.expenses();

        let summary = balance_summary(gains, expenses, period)?;
        let cards = vec![
            self.card("saldo", summary.balance, WalletIcon::Dollar, &self.palette.balance),
            self.card("Entradas", summary.total_gains, WalletIcon::ArrowUp, &self.palette.gains),
            self.card("Saídas", summary.total_expenses, WalletIcon::ArrowDown, &self.palette.expenses),
        ];

        Ok(DashboardView {
            period,
            months: month_options(),
            years: year_options(&self.dashboard_years()?),
            cards,
            summary,
            message: status_message(summary.balance),
            breakdown: breakdown(summary.total_gains, summary.total_expenses, &self.palette)?,
            history: monthly_series_at(gains, expenses, period.year, today)?,
            history_colors: (self.palette.gains.clone(), self.palette.expenses.clone()),
        })
    }

    /// Compute a transaction list
    pub fn list(
        &self,
        kind: ListKind,
        period: Period,
        frequencies: &FrequencySet,
    ) -> CoreResult<ListView> {
        log::debug!("Computing {} list for {}", kind, period);

        let line_color = match kind {
            ListKind::Gains => self.palette.balance.clone(),
            ListKind::Expenses => self.palette.expenses.clone(),
        };

        Ok(ListView {
            kind,
            title: kind.title().to_string(),
            line_color,
            period,
            months: month_options(),
            years: year_options(&self.list_years(kind)?),
            frequencies: frequencies.clone(),
            entries: filter_and_format(
                self.records(kind),
                &kind.to_string(),
                period,
                frequencies,
                &self.format,
                &self.palette,
            )?,
        })
    }
}

fn reconciled(period: Period, available: &[i32]) -> Period {
    let year = reconcile_year(period.year, available);
    if year != period.year {
        log::info!("No records in {}, selecting {}", period.year, year);
    }
    Period { year, ..period }
}

// ==================== Dashboard ====================

/// Selection state of the dashboard page
#[derive(Debug)]
pub struct DashboardSession<'a> {
    wallet: &'a Wallet,
    period: Period,
}

impl<'a> DashboardSession<'a> {
    /// Start on the current month, reconciled against the store
    pub fn new(wallet: &'a Wallet) -> CoreResult<Self> {
        Self::starting_at(wallet, Period::current())
    }

    /// Start on `period`, reconciled against the store
    pub fn starting_at(wallet: &'a Wallet, period: Period) -> CoreResult<Self> {
        let years = wallet.dashboard_years()?;
        Ok(Self {
            wallet,
            period: reconciled(period, &years),
        })
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Select a month from raw selector input
    pub fn select_month(&mut self, raw: &str) -> CoreResult<()> {
        self.period.month = parse_month(raw)?;
        Ok(())
    }

    /// Select a year from raw selector input, then reconcile it
    pub fn select_year(&mut self, raw: &str) -> CoreResult<()> {
        let year = parse_year(raw)?;
        let years = self.wallet.dashboard_years()?;
        self.period = reconciled(Period { year, ..self.period }, &years);
        Ok(())
    }

    /// Recompute the dashboard for the current selection
    pub fn view(&self) -> CoreResult<DashboardView> {
        self.wallet.dashboard(self.period)
    }
}

// ==================== List ====================

/// Selection state of a transaction list page
#[derive(Debug)]
pub struct ListSession<'a> {
    wallet: &'a Wallet,
    kind: ListKind,
    period: Period,
    frequencies: FrequencySet,
}

impl<'a> ListSession<'a> {
    /// Start on the current month with every frequency visible
    pub fn new(wallet: &'a Wallet, kind: ListKind) -> CoreResult<Self> {
        Self::starting_at(wallet, kind, Period::current())
    }

    /// Start on `period` with every frequency visible
    pub fn starting_at(wallet: &'a Wallet, kind: ListKind, period: Period) -> CoreResult<Self> {
        let years = wallet.list_years(kind)?;
        Ok(Self {
            wallet,
            kind,
            period: reconciled(period, &years),
            frequencies: FrequencySet::default(),
        })
    }

    /// Start from a route value such as `entry-balance`
    pub fn from_route(wallet: &'a Wallet, route: &str) -> CoreResult<Self> {
        let kind = route
            .parse::<ListKind>()
            .map_err(|_| CoreError::invalid_selection("list type", route))?;
        Self::new(wallet, kind)
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn frequencies(&self) -> &FrequencySet {
        &self.frequencies
    }

    /// Switch to the other record set; the year is reconciled again
    pub fn set_kind(&mut self, kind: ListKind) -> CoreResult<()> {
        let years = self.wallet.list_years(kind)?;
        self.kind = kind;
        self.period = reconciled(self.period, &years);
        Ok(())
    }

    /// Select a month from raw selector input
    pub fn select_month(&mut self, raw: &str) -> CoreResult<()> {
        self.period.month = parse_month(raw)?;
        Ok(())
    }

    /// Select a year from raw selector input, then reconcile it
    pub fn select_year(&mut self, raw: &str) -> CoreResult<()> {
        let year = parse_year(raw)?;
        let years = self.wallet.list_years(self.kind)?;
        self.period = reconciled(Period { year, ..self.period }, &years);
        Ok(())
    }

    /// Toggle a frequency tag from raw input
    pub fn toggle_frequency(&mut self, raw: &str) -> CoreResult<()> {
        self.frequencies = toggle_frequency_str(&self.frequencies, raw)?;
        Ok(())
    }

    /// Recompute the list for the current selection
    pub fn view(&self) -> CoreResult<ListView> {
        self.wallet.list(self.kind, self.period, &self.frequencies)
    }
}
