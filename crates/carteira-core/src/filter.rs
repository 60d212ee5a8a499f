//! Transaction list filtering by period and frequency

use std::collections::BTreeSet;

use carteira_config::PaletteConfig;
use carteira_store::{Frequency, TransactionRecord};
use serde::{Deserialize, Serialize};

use crate::aggregate::parse_amount;
use crate::error::{CoreError, CoreResult};
use crate::format::CurrencyFormat;
use crate::models::{FilteredEntry, Period};
use crate::period::record_date;

/// Frequencies whose transactions are visible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencySet(BTreeSet<Frequency>);

impl Default for FrequencySet {
    /// Every frequency visible
    fn default() -> Self {
        Self(Frequency::ALL.into_iter().collect())
    }
}

impl FrequencySet {
    /// A set with no frequency visible
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, frequency: Frequency) -> bool {
        self.0.contains(&frequency)
    }

    pub fn iter(&self) -> impl Iterator<Item = Frequency> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Frequency> for FrequencySet {
    fn from_iter<I: IntoIterator<Item = Frequency>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Remove `target` if visible, add it otherwise
pub fn toggle_frequency(current: &FrequencySet, target: Frequency) -> FrequencySet {
    let mut next = current.0.clone();
    if !next.remove(&target) {
        next.insert(target);
    }
    FrequencySet(next)
}

/// Toggle a frequency given as text; unrecognized values are rejected
pub fn toggle_frequency_str(current: &FrequencySet, raw: &str) -> CoreResult<FrequencySet> {
    let target = raw
        .parse::<Frequency>()
        .map_err(|_| CoreError::UnknownFrequency {
            value: raw.to_string(),
        })?;
    Ok(toggle_frequency(current, target))
}

/// Tag color of a frequency
pub fn tag_color(frequency: Frequency, palette: &PaletteConfig) -> String {
    match frequency {
        Frequency::Recurring => palette.recurring.clone(),
        Frequency::Occasional => palette.occasional.clone(),
    }
}

/// Records of `period` with an allowed frequency, formatted for display
///
/// Input order is kept. Every call generates fresh ids.
pub fn filter_and_format(
    records: &[TransactionRecord],
    dataset: &str,
    period: Period,
    allowed: &FrequencySet,
    format: &CurrencyFormat,
    palette: &PaletteConfig,
) -> CoreResult<Vec<FilteredEntry>> {
    let mut entries = Vec::new();
    for record in records {
        let date = record_date(record, dataset)?;
        if !period.contains(&date) || !allowed.contains(record.frequency) {
            continue;
        }

        let amount = parse_amount(record, dataset)?;
        entries.push(FilteredEntry {
            id: carteira_utils::generate_id(),
            description: record.description.clone(),
            formatted_amount: format.format_currency(amount),
            frequency: record.frequency,
            formatted_date: format.format_date(date),
            tag_color: tag_color(record.frequency, palette),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::HashSet;

    fn record(description: &str, amount: &str, frequency: Frequency, date: &str) -> TransactionRecord {
        TransactionRecord::new(description, amount, frequency, date)
    }

    fn march_2021() -> Period {
        Period { month: 3, year: 2021 }
    }

    fn run(records: &[TransactionRecord], allowed: &FrequencySet) -> CoreResult<Vec<FilteredEntry>> {
        filter_and_format(
            records,
            "expenses",
            march_2021(),
            allowed,
            &CurrencyFormat::default(),
            &PaletteConfig::default(),
        )
    }

    #[test]
    fn test_default_set_has_both_frequencies() {
        let set = FrequencySet::default();
        assert!(set.contains(Frequency::Recurring));
        assert!(set.contains(Frequency::Occasional));
    }

    #[test]
    fn test_toggle_frequency() {
        let set = FrequencySet::default();
        let without = toggle_frequency(&set, Frequency::Occasional);
        assert!(without.contains(Frequency::Recurring));
        assert!(!without.contains(Frequency::Occasional));

        let with = toggle_frequency(&without, Frequency::Occasional);
        assert_eq!(with, set);
    }

    #[test]
    fn test_toggle_frequency_is_involutive() {
        let sets = [
            FrequencySet::default(),
            FrequencySet::empty(),
            [Frequency::Recurring].into_iter().collect(),
            [Frequency::Occasional].into_iter().collect(),
        ];
        for set in &sets {
            for target in Frequency::ALL {
                assert_eq!(&toggle_frequency(&toggle_frequency(set, target), target), set);
            }
        }
    }

    #[test]
    fn test_toggle_frequency_str_rejects_unknown() {
        let set = FrequencySet::default();
        let err = toggle_frequency_str(&set, "mensal").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownFrequency);

        let toggled = toggle_frequency_str(&set, "recorrente").unwrap();
        assert!(!toggled.contains(Frequency::Recurring));
    }

    #[test]
    fn test_occasional_expense_excluded_by_recurring_filter() {
        let expenses = vec![record("Cinema", "400", Frequency::Occasional, "2021-03-15")];
        let allowed: FrequencySet = [Frequency::Recurring].into_iter().collect();
        assert!(run(&expenses, &allowed).unwrap().is_empty());
    }

    #[test]
    fn test_filter_formats_entries() {
        let expenses = vec![
            record("Aluguel", "1500", Frequency::Recurring, "2021-03-05"),
            record("Cinema", "45.9", Frequency::Occasional, "2021-03-15"),
            record("Mercado", "320", Frequency::Occasional, "2021-04-02"),
        ];
        let entries = run(&expenses, &FrequencySet::default()).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].description, "Aluguel");
        assert_eq!(entries[0].formatted_amount, "R$ 1.500,00");
        assert_eq!(entries[0].formatted_date, "05/03/2021");
        assert_eq!(entries[0].tag_color, "#4E41F0");

        assert_eq!(entries[1].description, "Cinema");
        assert_eq!(entries[1].formatted_amount, "R$ 45,90");
        assert_eq!(entries[1].frequency, Frequency::Occasional);
        assert_eq!(entries[1].tag_color, "#E44C4E");
    }

    #[test]
    fn test_filter_ids_unique_and_regenerated() {
        let expenses = vec![
            record("A", "1", Frequency::Recurring, "2021-03-01"),
            record("A", "1", Frequency::Recurring, "2021-03-01"),
        ];
        let first = run(&expenses, &FrequencySet::default()).unwrap();
        let second = run(&expenses, &FrequencySet::default()).unwrap();

        let ids: HashSet<&str> = first.iter().chain(second.iter()).map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_filter_empty_set_shows_nothing() {
        let expenses = vec![record("Aluguel", "1500", Frequency::Recurring, "2021-03-05")];
        assert!(run(&expenses, &FrequencySet::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_filter_bad_amount_fails() {
        let expenses = vec![record("Aluguel", "mil", Frequency::Recurring, "2021-03-05")];
        let err = run(&expenses, &FrequencySet::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DataIntegrity);
    }
}
