//! Shared Error Types
//!
//! Field-level validation errors. Request validation collects every problem
//! it finds instead of stopping at the first one, so clients get the full list
//! in a single response.
//!
//! # Usage
//!
//! ```rust
//! use account_service::shared::error::ValidationErrors;
//!
//! let mut errors = ValidationErrors::new();
//! errors.push("email", "is required");
//! assert_eq!(errors.messages(), vec!["email: is required".to_string()]);
//! ```
use thiserror::Error;

/// A single invalid field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field error found while validating one request
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("validation failed: {}", summarize(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    /// Empty error list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem with `field`
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether any error was recorded against `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// One `"field: message"` string per error, as sent to clients
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}
