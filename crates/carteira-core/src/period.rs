//! Period selection: month and year options, available years and year
//! reconciliation

use chrono::{DateTime, Datelike, Local, NaiveDate};

use carteira_store::TransactionRecord;

use crate::error::{CoreError, CoreResult};
use crate::models::{Period, SelectOption};

/// Full month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

impl Period {
    /// Create a period, rejecting months outside 1-12
    pub fn new(month: u32, year: i32) -> CoreResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::invalid_selection("month", &month.to_string()));
        }
        Ok(Self { month, year })
    }

    /// Month and year of the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// Month and year of today, local clock
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// Parse the date of a record
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (date part).
pub fn record_date(record: &TransactionRecord, dataset: &str) -> CoreResult<NaiveDate> {
    let raw = record.date.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| CoreError::DataIntegrity {
            dataset: dataset.to_string(),
            field: "date".to_string(),
            value: record.date.clone(),
        })
}

/// Three-letter label of a zero-based month index
pub fn month_label(month_index: u32) -> String {
    MONTH_NAMES
        .get(month_index as usize)
        .map(|name| name.chars().take(3).collect())
        .unwrap_or_default()
}

/// Options of the month selector, values 1-12
pub fn month_options() -> Vec<SelectOption> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| SelectOption {
            value: index as i32 + 1,
            label: name.to_string(),
        })
        .collect()
}

/// Options of the year selector
pub fn year_options(years: &[i32]) -> Vec<SelectOption> {
    years
        .iter()
        .map(|&year| SelectOption {
            value: year,
            label: year.to_string(),
        })
        .collect()
}

/// Distinct record years, in order of first occurrence
///
/// `dataset` names the record set in data-integrity errors.
pub fn available_years(records: &[TransactionRecord], dataset: &str) -> CoreResult<Vec<i32>> {
    let mut years = Vec::new();
    for record in records {
        let year = record_date(record, dataset)?.year();
        if !years.contains(&year) {
            years.push(year);
        }
    }
    Ok(years)
}

/// Keep `selected` if it has records, otherwise jump to the latest year
///
/// With no available years the selection is returned unchanged.
pub fn reconcile_year(selected: i32, available: &[i32]) -> i32 {
    if available.contains(&selected) {
        return selected;
    }
    available.iter().copied().max().unwrap_or(selected)
}

/// Parse a month selection (1-12)
pub fn parse_month(raw: &str) -> CoreResult<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|month| (1..=12).contains(month))
        .ok_or_else(|| CoreError::invalid_selection("month", raw))
}

/// Parse a year selection
pub fn parse_year(raw: &str) -> CoreResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CoreError::invalid_selection("year", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use carteira_store::Frequency;

    fn record(date: &str) -> TransactionRecord {
        TransactionRecord::new("test", "10", Frequency::Recurring, date)
    }

    #[test]
    fn test_available_years_first_occurrence_order() {
        let records = vec![
            record("2021-03-10"),
            record("2020-12-01"),
            record("2021-07-15"),
            record("2019-01-31"),
            record("2020-02-02"),
        ];
        assert_eq!(available_years(&records, "gains").unwrap(), vec![2021, 2020, 2019]);
    }

    #[test]
    fn test_available_years_empty() {
        let records: Vec<TransactionRecord> = vec![];
        assert!(available_years(&records, "gains").unwrap().is_empty());
    }

    #[test]
    fn test_available_years_bad_date() {
        let records = vec![record("2021-03-10"), record("10/03/2021")];
        let err = available_years(&records, "expenses").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DataIntegrity);
        assert!(err.to_string().contains("in expenses database"));
    }

    #[test]
    fn test_record_date_rfc3339() {
        let date = record_date(&record("2021-03-10T12:30:00Z"), "gains").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 10).unwrap());
    }

    #[test]
    fn test_reconcile_year() {
        assert_eq!(reconcile_year(2020, &[2019, 2020, 2021]), 2020);
        assert_eq!(reconcile_year(2026, &[2019, 2021, 2020]), 2021);
        assert_eq!(reconcile_year(1999, &[2019]), 2019);
    }

    #[test]
    fn test_reconcile_year_never_leaves_available() {
        let available = [2018, 2021, 2019];
        for selected in 2010..2030 {
            assert!(available.contains(&reconcile_year(selected, &available)));
        }
    }

    #[test]
    fn test_reconcile_year_empty_keeps_selection() {
        assert_eq!(reconcile_year(2024, &[]), 2024);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("3").unwrap(), 3);
        assert_eq!(parse_month(" 12 ").unwrap(), 12);
        assert_eq!(parse_month("0").unwrap_err().code(), ErrorCode::InvalidSelection);
        assert_eq!(parse_month("13").unwrap_err().code(), ErrorCode::InvalidSelection);
        assert_eq!(parse_month("março").unwrap_err().code(), ErrorCode::InvalidSelection);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2021").unwrap(), 2021);
        assert_eq!(parse_year("").unwrap_err().code(), ErrorCode::InvalidSelection);
        assert_eq!(parse_year("20x1").unwrap_err().code(), ErrorCode::InvalidSelection);
    }

    #[test]
    fn test_period_new_and_contains() {
        assert!(Period::new(13, 2021).is_err());
        let period = Period::new(3, 2021).unwrap();
        assert!(period.contains(&NaiveDate::from_ymd_opt(2021, 3, 31).unwrap()));
        assert!(!period.contains(&NaiveDate::from_ymd_opt(2020, 3, 31).unwrap()));
        assert_eq!(period.to_string(), "03/2021");
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label(0), "Jan");
        assert_eq!(month_label(1), "Fev");
        assert_eq!(month_label(2), "Mar");
        assert_eq!(month_label(11), "Dez");
        assert_eq!(month_label(12), "");
    }

    #[test]
    fn test_selector_options() {
        let months = month_options();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], SelectOption { value: 1, label: "Janeiro".to_string() });
        assert_eq!(months[11].value, 12);

        let years = year_options(&[2021, 2020]);
        assert_eq!(years[1], SelectOption { value: 2020, label: "2020".to_string() });
    }
}
