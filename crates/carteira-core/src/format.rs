//! Locale formatting policy for money and dates

use std::fmt::Write;

use carteira_config::CurrencyConfig;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency and date formatting; Brazilian Portuguese by default
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_places: u32,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub date_format: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::from(&CurrencyConfig::default())
    }
}

impl From<&CurrencyConfig> for CurrencyFormat {
    fn from(config: &CurrencyConfig) -> Self {
        Self {
            symbol: config.symbol.clone(),
            decimal_places: config.decimal_places,
            thousands_separator: config.thousands_separator.clone(),
            decimal_separator: config.decimal_separator.clone(),
            date_format: config.date_format.clone(),
        }
    }
}

impl CurrencyFormat {
    /// Format an amount, e.g. `R$ 1.234,56` or `-R$ 10,00`
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero)
            .abs();
        let negative = amount.is_sign_negative() && !rounded.is_zero();

        let plain = format!("{:.*}", self.decimal_places as usize, rounded);
        let (integer, fraction) = match plain.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push(' ');
        out.push_str(&carteira_utils::format_number(integer, &self.thousands_separator));
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    /// Format a calendar date, e.g. `10/03/2021`
    ///
    /// An unusable `date_format` falls back to `YYYY-MM-DD`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            out = date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_currency_pt_br() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format_currency(dec("1234.5")), "R$ 1.234,50");
        assert_eq!(format.format_currency(dec("0")), "R$ 0,00");
        assert_eq!(format.format_currency(dec("999.999")), "R$ 1.000,00");
        assert_eq!(format.format_currency(dec("1234567.891")), "R$ 1.234.567,89");
        assert_eq!(format.format_currency(dec("0.005")), "R$ 0,01");
    }

    #[test]
    fn test_format_currency_negative() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format_currency(dec("-1500")), "-R$ 1.500,00");
        assert_eq!(format.format_currency(dec("-0.001")), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_custom_policy() {
        let config = CurrencyConfig {
            symbol: "US$".to_string(),
            decimal_places: 0,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        };
        let format = CurrencyFormat::from(&config);
        assert_eq!(format.format_currency(dec("1234.5")), "US$ 1,235");
        assert_eq!(
            format.format_date(NaiveDate::from_ymd_opt(2021, 3, 10).unwrap()),
            "2021-03-10"
        );
    }

    #[test]
    fn test_format_date_bad_pattern_falls_back() {
        let format = CurrencyFormat {
            date_format: "%Q".to_string(),
            ..CurrencyFormat::default()
        };
        let date = NaiveDate::from_ymd_opt(2021, 3, 10).unwrap();
        assert_eq!(format.format_date(date), "2021-03-10");
    }

    #[test]
    fn test_format_date_pt_br() {
        let format = CurrencyFormat::default();
        let date = NaiveDate::from_ymd_opt(2021, 3, 10).unwrap();
        assert_eq!(format.format_date(date), "10/03/2021");
    }
}
