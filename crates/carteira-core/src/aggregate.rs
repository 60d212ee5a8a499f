//! Totals, monthly history, gains-vs-expenses breakdown and status message

use std::str::FromStr;

use carteira_config::PaletteConfig;
use carteira_store::TransactionRecord;
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CoreError, CoreResult};
use crate::models::{BalanceSummary, Breakdown, BreakdownSlice, MonthlyTotal, Period, StatusMessage};
use crate::period::{month_label, record_date};
use crate::types::Mood;

/// Parse the amount of a record
///
/// Plain and scientific decimal notation are accepted; anything else is a
/// data-integrity error.
pub fn parse_amount(record: &TransactionRecord, dataset: &str) -> CoreResult<Decimal> {
    let raw = record.amount.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| CoreError::DataIntegrity {
            dataset: dataset.to_string(),
            field: "amount".to_string(),
            value: record.amount.clone(),
        })
}

fn amount_overflow(dataset: &str, value: String) -> CoreError {
    CoreError::DataIntegrity {
        dataset: dataset.to_string(),
        field: "amount".to_string(),
        value,
    }
}

/// Sum of the amounts of `records` dated in `month` of `year`
///
/// `dataset` names the record set in data-integrity errors.
pub fn total_for_period(
    records: &[TransactionRecord],
    dataset: &str,
    month: u32,
    year: i32,
) -> CoreResult<Decimal> {
    let period = Period { month, year };
    let mut total = Decimal::ZERO;
    for record in records {
        if !period.contains(&record_date(record, dataset)?) {
            continue;
        }
        let amount = parse_amount(record, dataset)?;
        total = total
            .checked_add(amount)
            .ok_or_else(|| amount_overflow(dataset, record.amount.clone()))?;
    }
    Ok(total)
}

/// Gains, expenses and balance of one period
pub fn balance_summary(
    gains: &[TransactionRecord],
    expenses: &[TransactionRecord],
    period: Period,
) -> CoreResult<BalanceSummary> {
    let total_gains = total_for_period(gains, "gains", period.month, period.year)?;
    let total_expenses = total_for_period(expenses, "expenses", period.month, period.year)?;
    BalanceSummary::checked(total_gains, total_expenses).ok_or_else(|| {
        amount_overflow(
            "gains and expenses",
            format!("{} - {}", total_gains, total_expenses),
        )
    })
}

/// Monthly gains and expenses of `year`, up to the current month
pub fn monthly_series(
    gains: &[TransactionRecord],
    expenses: &[TransactionRecord],
    year: i32,
) -> CoreResult<Vec<MonthlyTotal>> {
    monthly_series_at(gains, expenses, year, Local::now().date_naive())
}

/// Monthly series relative to `today`
///
/// All 12 months are built, then months after `today` are dropped: every
/// month of a past year is kept, none of a future year.
pub fn monthly_series_at(
    gains: &[TransactionRecord],
    expenses: &[TransactionRecord],
    year: i32,
    today: NaiveDate,
) -> CoreResult<Vec<MonthlyTotal>> {
    let mut series = Vec::with_capacity(12);
    for month_index in 0..12u32 {
        let month = month_index + 1;
        series.push(MonthlyTotal {
            month_index,
            month_label: month_label(month_index),
            gains_total: total_for_period(gains, "gains", month, year)?,
            expenses_total: total_for_period(expenses, "expenses", month, year)?,
        });
    }

    let current_year = today.year();
    let current_month = today.month0();
    series.retain(|item| {
        year < current_year || (year == current_year && item.month_index <= current_month)
    });

    Ok(series)
}

fn percent_of(part: Decimal, total: Decimal) -> Option<Decimal> {
    if total > Decimal::ZERO {
        Some(
            part.checked_div(total)?
                .checked_mul(Decimal::ONE_HUNDRED)?
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        )
    } else {
        Some(Decimal::ZERO)
    }
}

/// Share of gains and expenses in their combined total
///
/// Fails when the combined total does not fit in a `Decimal`.
pub fn breakdown(
    total_gains: Decimal,
    total_expenses: Decimal,
    palette: &PaletteConfig,
) -> CoreResult<Breakdown> {
    let overflow = || {
        amount_overflow(
            "gains and expenses",
            format!("{} + {}", total_gains, total_expenses),
        )
    };
    let total = total_gains.checked_add(total_expenses).ok_or_else(overflow)?;

    Ok(Breakdown([
        BreakdownSlice {
            label: "Entradas".to_string(),
            value: total_gains,
            percent: percent_of(total_gains, total).ok_or_else(overflow)?,
            color: palette.gains.clone(),
        },
        BreakdownSlice {
            label: "Saídas".to_string(),
            value: total_expenses,
            percent: percent_of(total_expenses, total).ok_or_else(overflow)?,
            color: palette.expenses.clone(),
        },
    ]))
}

/// Status message for a balance: negative, exactly zero or positive
pub fn status_message(balance: Decimal) -> StatusMessage {
    let (title, description, footer_text, mood) = if balance < Decimal::ZERO {
        (
            "Que triste!",
            "Neste mês, você gastou mais do que deveria.",
            "Verifique seus gastos e tente cortar algumas coisas desnecessárias.",
            Mood::Sad,
        )
    } else if balance.is_zero() {
        (
            "Ufaa!",
            "Neste mês, você gastou exatamente o que ganhou.",
            "Tenha cuidado. No próximo tente poupar o seu dinheiro.",
            Mood::Neutral,
        )
    } else {
        (
            "Muito bem!",
            "Sua carteira está positiva.",
            "Continue assim. Considere investir o seu saldo.",
            Mood::Happy,
        )
    };

    StatusMessage {
        title: title.to_string(),
        description: description.to_string(),
        footer_text: footer_text.to_string(),
        mood,
    }
}
