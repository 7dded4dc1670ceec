//! Application error type

use super::codes::ErrorCode;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned by every fallible booking operation
///
/// `details` carries structured context such as the offending `field` or a
/// rejected `token`, keyed by name.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the default message of `code`
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    /// Name of the form field this error belongs to, if any
    pub fn field(&self) -> Option<&str> {
        self.detail("field").and_then(Value::as_str)
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn required(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{f} is required"))
            .with_detail("field", f)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::BookingNotEditable);
        assert_eq!(err.message, "This booking cannot be edited");
        assert!(err.details.is_none());
        assert!(err.field().is_none());
    }

    #[test]
    fn test_details() {
        let err = AppError::validation("note is too long")
            .with_detail("field", "note")
            .with_detail("max", 500);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.field(), Some("note"));
        assert_eq!(err.detail("max").unwrap(), 500);
        assert!(err.detail("missing").is_none());
        assert_eq!(err.to_string(), "note is too long");
    }

    #[test]
    fn test_required() {
        let err = AppError::required("booking");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "booking is required");
        assert_eq!(err.field(), Some("booking"));
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            AppError::not_authenticated().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::config("bad window").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
