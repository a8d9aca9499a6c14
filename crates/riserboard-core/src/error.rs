//! Error types for riserboard-core
//!
//! Error codes, severities and detail payloads for dataset loading and
//! lookups, plus the logger used to report swallowed failures.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Dataset not loaded
    NotLoaded,
    /// Transaction not found
    TransactionNotFound,
    /// Parse error
    ParseError,
    /// IO error
    IoError,
    /// File not found
    FileNotFound,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotLoaded => write!(f, "NOT_LOADED"),
            ErrorCode::TransactionNotFound => write!(f, "TRANSACTION_NOT_FOUND"),
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::FileNotFound => write!(f, "FILE_NOT_FOUND"),
        }
    }
}

/// Detailed error information for API responses
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
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

impl ErrorSeverity {
    /// Log level used when an error of this severity is reported
    pub fn level(&self) -> log::Level {
        match self {
            ErrorSeverity::Info => log::Level::Info,
            ErrorSeverity::Warning => log::Level::Warn,
            ErrorSeverity::Error => log::Level::Error,
        }
    }
}

/// Main error type for riserboard-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dataset not loaded")]
    NotLoaded,

    #[error("Transaction not found: {id}")]
    TransactionNotFound { id: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotLoaded => ErrorCode::NotLoaded,
            CoreError::TransactionNotFound { .. } => ErrorCode::TransactionNotFound,
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::IoError { .. } => ErrorCode::IoError,
            CoreError::FileNotFound { .. } => ErrorCode::FileNotFound,
        }
    }

    /// Get the severity level, which also picks the log level when reported
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::NotLoaded => ErrorSeverity::Warning,
            CoreError::TransactionNotFound { .. } => ErrorSeverity::Info,
            CoreError::ParseError { .. } => ErrorSeverity::Error,
            CoreError::IoError { .. } => ErrorSeverity::Error,
            CoreError::FileNotFound { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::NotLoaded => {
                details = details.with_suggestion(
                    "Check the data.path and data.file settings, then POST /api/reload.".to_string()
                );
            }
            CoreError::TransactionNotFound { .. } => {
                details = details.with_suggestion(
                    "Use the /api/transactions endpoint to list all transactions.".to_string()
                );
            }
            CoreError::ParseError { message } => {
                details = details.with_detail(serde_json::json!({ "parse_message": message }));
                details = details.with_suggestion(
                    "The dataset must be a JSON object with a \"transactions\" array.".to_string()
                );
            }
            CoreError::FileNotFound { .. } => {
                details = details.with_suggestion(
                    "Check if the file path is correct.".to_string()
                );
                details = details.with_suggestion(
                    "Ensure the file exists and is readable.".to_string()
                );
            }
            _ => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<io::Error> for CoreError {
    fn from(error: io::Error) -> Self {
        CoreError::IoError { message: error.to_string() }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(error: serde_json::Error) -> Self {
        CoreError::ParseError { message: error.to_string() }
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
pub trait ErrorLogger: Send + Sync {
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
        log::log!(
            target: "riserboard::error",
            error.severity().level(),
            "{} [{}] {} - Operation: {} - Context: {}",
            error.severity().to_string().to_uppercase(),
            error.code(),
            error.to_details(),
            context.operation,
            context.data
        );
    }

    fn log_warning(&self, message: &str, context: &ErrorContext) {
        log::warn!(
            target: "riserboard::error",
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
        assert_eq!(ErrorCode::NotLoaded.to_string(), "NOT_LOADED");
        assert_eq!(ErrorCode::TransactionNotFound.to_string(), "TRANSACTION_NOT_FOUND");
        assert_eq!(ErrorCode::ParseError.to_string(), "PARSE_ERROR");
    }

    #[test]
    fn test_core_error_severity() {
        assert_eq!(CoreError::NotLoaded.severity(), ErrorSeverity::Warning);
        assert_eq!(CoreError::NotLoaded.severity().level(), log::Level::Warn);
        assert_eq!(
            CoreError::TransactionNotFound { id: "T9".to_string() }.severity().level(),
            log::Level::Info
        );
        assert_eq!(
            CoreError::FileNotFound { path: "data.json".to_string() }.severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_parse_error_details() {
        let error: CoreError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::ParseError);
        assert!(details.details.is_some());
        assert!(!details.suggestions.is_empty());
    }

    #[test]
    fn test_io_error_conversion() {
        let error: CoreError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(error.code(), ErrorCode::IoError);
        assert!(error.to_string().contains("denied"));
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("load_dataset")
            .with_data("source", serde_json::json!("data/data.json"));

        assert_eq!(context.operation, "load_dataset");
        assert_eq!(context.data["source"], "data/data.json");
    }
}
