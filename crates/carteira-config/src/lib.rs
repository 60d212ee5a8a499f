//! Configuration management for carteira
//!
//! This module handles loading, validation, and management of
//! carteira configuration from YAML files.

pub mod error;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Record data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the record files
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Gains (income) file name, relative to `path`
    #[serde(default = "default_gains_file")]
    pub gains_file: String,
    /// Expenses file name, relative to `path`
    #[serde(default = "default_expenses_file")]
    pub expenses_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            gains_file: default_gains_file(),
            expenses_file: default_expenses_file(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_gains_file() -> String {
    "gains.json".to_string()
}

fn default_expenses_file() -> String {
    "expenses.json".to_string()
}

/// Currency and date formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency symbol placed before the amount
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
    /// chrono format string for transaction dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: default_decimal_places(),
            thousands_separator: default_thousands_sep(),
            decimal_separator: default_decimal_sep(),
            date_format: default_date_format(),
        }
    }
}

fn default_symbol() -> String {
    "R$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_thousands_sep() -> String {
    ".".to_string()
}

fn default_decimal_sep() -> String {
    ",".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

/// Fixed display colors handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Gains slice, card and history line
    #[serde(default = "default_gains_color")]
    pub gains: String,
    /// Expenses slice, card and history line
    #[serde(default = "default_expenses_color")]
    pub expenses: String,
    /// Balance card
    #[serde(default = "default_balance_color")]
    pub balance: String,
    /// Tag color of recurring transactions
    #[serde(default = "default_recurring_color")]
    pub recurring: String,
    /// Tag color of occasional transactions
    #[serde(default = "default_occasional_color")]
    pub occasional: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            gains: default_gains_color(),
            expenses: default_expenses_color(),
            balance: default_balance_color(),
            recurring: default_recurring_color(),
            occasional: default_occasional_color(),
        }
    }
}

fn default_gains_color() -> String {
    "#F7931B".to_string()
}

fn default_expenses_color() -> String {
    "#E44C4E".to_string()
}

fn default_balance_color() -> String {
    "#4E41F0".to_string()
}

fn default_recurring_color() -> String {
    "#4E41F0".to_string()
}

fn default_occasional_color() -> String {
    "#E44C4E".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Record file settings
    #[serde(default)]
    pub data: DataConfig,
    /// Currency and date formatting
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Display colors
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data.gains_file.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "data.gains_file".to_string(),
            });
        }

        if self.data.expenses_file.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "data.expenses_file".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        if self.currency.decimal_separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_separator".to_string(),
                reason: "Decimal separator must not be empty".to_string(),
            });
        }

        if self.currency.thousands_separator == self.currency.decimal_separator {
            return Err(ConfigError::ValidationError {
                message: "Thousands and decimal separators must differ".to_string(),
            });
        }

        let date_format = &self.currency.date_format;
        if date_format.is_empty()
            || StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(ConfigError::InvalidValue {
                field: "currency.date_format".to_string(),
                reason: format!("Invalid date format: {:?}", date_format),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Full path to the gains record file
    pub fn gains_path(&self) -> PathBuf {
        self.data.path.join(&self.data.gains_file)
    }

    /// Full path to the expenses record file
    pub fn expenses_path(&self) -> PathBuf {
        self.data.path.join(&self.data.expenses_file)
    }
}
