//! Error types for carteira-core
//!
//! Malformed records and invalid selections are contract violations of the
//! collaborators, so they propagate to the caller instead of being skipped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use carteira_store::StoreError;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A record field could not be interpreted
    DataIntegrity,
    /// A month, year or list selection is not valid
    InvalidSelection,
    /// A frequency toggle with an unrecognized value
    UnknownFrequency,
    /// Record loading failed
    StoreError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::DataIntegrity => write!(f, "DATA_INTEGRITY"),
            ErrorCode::InvalidSelection => write!(f, "INVALID_SELECTION"),
            ErrorCode::UnknownFrequency => write!(f, "UNKNOWN_FREQUENCY"),
            ErrorCode::StoreError => write!(f, "STORE_ERROR"),
        }
    }
}

/// Detailed error information for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - the request was rejected, state is unchanged
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - the record data itself is corrupt
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for carteira-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{field} in {dataset} database is invalid. Value: {value:?}")]
    DataIntegrity {
        dataset: String,
        field: String,
        value: String,
    },

    #[error("Invalid {field} value: {value:?}")]
    InvalidSelection { field: String, value: String },

    #[error("Unknown frequency: {value:?}")]
    UnknownFrequency { value: String },

    #[error("Store error: {message}")]
    Store { message: String },
}

impl CoreError {
    pub(crate) fn invalid_selection(field: &str, value: &str) -> Self {
        CoreError::InvalidSelection {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::DataIntegrity { .. } => ErrorCode::DataIntegrity,
            CoreError::InvalidSelection { .. } => ErrorCode::InvalidSelection,
            CoreError::UnknownFrequency { .. } => ErrorCode::UnknownFrequency,
            CoreError::Store { .. } => ErrorCode::StoreError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::DataIntegrity { .. } => ErrorSeverity::Critical,
            CoreError::InvalidSelection { .. } => ErrorSeverity::Warning,
            CoreError::UnknownFrequency { .. } => ErrorSeverity::Warning,
            CoreError::Store { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::DataIntegrity { dataset, field, value } => {
                details = details.with_detail(serde_json::json!({
                    "dataset": dataset,
                    "field": field,
                    "value": value,
                }));
                details = details.with_suggestion(format!(
                    "Fix the {} of the offending record in the {} file.",
                    field, dataset
                ));
                if field == "amount" {
                    details = details.with_suggestion(
                        "Amounts must be plain decimal numbers such as \"1500.00\".".to_string(),
                    );
                }
            }
            CoreError::InvalidSelection { field, .. } => {
                details = details.with_suggestion(match field.as_str() {
                    "month" => "Months are integers from 1 to 12.".to_string(),
                    "year" => "Years are integers such as 2021.".to_string(),
                    _ => "List types are 'entry-balance' and 'exit-balance'.".to_string(),
                });
            }
            CoreError::UnknownFrequency { .. } => {
                details = details.with_suggestion(
                    "Frequencies are 'recorrente' and 'eventual'.".to_string(),
                );
            }
            CoreError::Store { .. } => {
                details = details.with_suggestion(
                    "Check the data section of your config file.".to_string(),
                );
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<StoreError> for CoreError {
    fn from(error: StoreError) -> Self {
        CoreError::Store {
            message: error.to_string(),
        }
    }
}

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            data: serde_json::json!({}),
        }
    }

    /// Add context data
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
    /// Log a warning
    fn log_warning(&self, message: &str, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        log::error!(
            target: "carteira::error",
            "ERROR ({}) {} - Operation: {} - Context: {}",
            error.severity(),
            error.to_details(),
            context.operation,
            context.data
        );
    }

    fn log_warning(&self, message: &str, context: &ErrorContext) {
        log::warn!(
            target: "carteira::error",
            "WARNING: {} - Operation: {} - Context: {}",
            message,
            context.operation,
            context.data
        );
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::DataIntegrity.to_string(), "DATA_INTEGRITY");
        assert_eq!(ErrorCode::InvalidSelection.to_string(), "INVALID_SELECTION");
        assert_eq!(ErrorCode::UnknownFrequency.to_string(), "UNKNOWN_FREQUENCY");
    }

    #[test]
    fn test_core_error_severity() {
        let error = CoreError::DataIntegrity {
            dataset: "gains".to_string(),
            field: "amount".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Critical);

        let error = CoreError::invalid_selection("month", "treze");
        assert_eq!(error.severity(), ErrorSeverity::Warning);
        assert_eq!(error.code(), ErrorCode::InvalidSelection);
    }

    #[test]
    fn test_data_integrity_message() {
        let error = CoreError::DataIntegrity {
            dataset: "expenses".to_string(),
            field: "amount".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "amount in expenses database is invalid. Value: \"abc\""
        );

        let details = error.to_details();
        assert_eq!(details.code, ErrorCode::DataIntegrity);
        assert!(details.details.is_some());
        assert_eq!(details.suggestions.len(), 2);
    }

    #[test]
    fn test_selection_suggestion() {
        let details = CoreError::invalid_selection("year", "20x1").to_details();
        assert!(details.suggestions[0].contains("Years"));
        assert!(details.to_string().starts_with("[INVALID_SELECTION]"));
    }

    #[test]
    fn test_store_error_conversion() {
        let store_error = StoreError::SyntaxError {
            location: "gains.json:1:1".to_string(),
            message: "expected value".to_string(),
        };
        let error: CoreError = store_error.into();
        assert_eq!(error.code(), ErrorCode::StoreError);
        assert!(error.to_string().contains("gains.json:1:1"));
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("dashboard")
            .with_data("month", serde_json::json!(3))
            .with_data("year", serde_json::json!(2021));

        assert_eq!(context.operation, "dashboard");
        assert_eq!(context.data["year"], 2021);
    }
}
