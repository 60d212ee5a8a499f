//! Plain-text rendering of the dashboard and list views

use std::fmt::{self, Write};

use carteira_core::{CurrencyFormat, DashboardView, ListView};

/// Render the dashboard page
pub fn dashboard(view: &DashboardView, format: &CurrencyFormat) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let years: Vec<&str> = view.years.iter().map(|o| o.label.as_str()).collect();

    writeln!(out, "Dashboard - {}", view.period)?;
    writeln!(out, "Anos disponíveis: {}", years.join(", "))?;
    writeln!(out)?;

    for card in &view.cards {
        writeln!(out, "[{}] {:<10} {}", card.icon.as_str(), card.title, card.formatted_amount)?;
    }
    writeln!(out)?;

    writeln!(out, "{} ({})", view.message.title, view.message.mood.icon())?;
    writeln!(out, "  {}", view.message.description)?;
    writeln!(out, "  {}", view.message.footer_text)?;
    writeln!(out)?;

    writeln!(out, "Relação")?;
    for slice in view.breakdown.slices() {
        writeln!(out, "  {:<10} {:>5}%", slice.label, slice.percent)?;
    }
    writeln!(out)?;

    writeln!(out, "Histórico de saldo")?;
    for item in &view.history {
        writeln!(
            out,
            "  {}  {:>16}  {:>16}",
            item.month_label,
            format.format_currency(item.gains_total),
            format.format_currency(item.expenses_total)
        )?;
    }

    Ok(out)
}

/// Render a transaction list page
pub fn list(view: &ListView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let visible: Vec<&str> = view.frequencies.iter().map(|f| f.as_str()).collect();

    writeln!(out, "{} - {}", view.title, view.period)?;
    writeln!(out, "Frequências: {}", visible.join(", "))?;
    writeln!(out)?;

    if view.entries.is_empty() {
        writeln!(out, "  (nenhum registro)")?;
    }
    for entry in &view.entries {
        writeln!(
            out,
            "  {}  {:<30} {:>16}  {}",
            entry.formatted_date, entry.description, entry.formatted_amount, entry.frequency
        )?;
    }

    Ok(out)
}
