// Error taxonomy for raw form input
//
// Two recoverable kinds, both surfaced to the user and never past the form:
// - ValidationError: a required field is empty or a business rule is broken
// - FormatError: a numeric field does not parse as an integer

use thiserror::Error;

/// Result alias for record construction and validation
pub type Result<T> = std::result::Result<T, RecordError>;

/// Which rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required text is missing
    Empty,
    /// Number is zero or negative
    NotPositive,
    /// Number is positive but too large to store
    OutOfRange,
}

/// A required field is empty or a business rule (age > 0) is violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.to_string(),
            kind,
            message: message.into(),
        }
    }

    pub fn empty(field: &str) -> Self {
        Self::new(field, ValidationErrorKind::Empty, "required field is empty")
    }

    pub fn not_positive(field: &str, value: i64) -> Self {
        Self::new(
            field,
            ValidationErrorKind::NotPositive,
            format!("must be greater than 0, got {}", value),
        )
    }

    pub fn out_of_range(field: &str, value: i64) -> Self {
        Self::new(
            field,
            ValidationErrorKind::OutOfRange,
            format!("{} is out of range", value),
        )
    }
}

/// A field expected to hold an integer holds something else
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: '{input}' is not a number")]
pub struct FormatError {
    pub field: String,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid format: {0}")]
    Format(#[from] FormatError),
}

impl RecordError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            RecordError::Validation(e) => &e.field,
            RecordError::Format(e) => &e.field,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RecordError::Validation(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, RecordError::Format(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::empty("name");
        assert_eq!(err.to_string(), "name: required field is empty");

        let err = ValidationError::not_positive("age", -5);
        assert_eq!(err.to_string(), "age: must be greater than 0, got -5");
        assert_eq!(err.kind, ValidationErrorKind::NotPositive);

        let err = ValidationError::out_of_range("age", 99999999999);
        assert_eq!(err.to_string(), "age: 99999999999 is out of range");
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn test_record_error_kinds() {
        let err: RecordError = ValidationError::empty("nim").into();
        assert!(err.is_validation());
        assert!(!err.is_format());
        assert_eq!(err.field(), "nim");

        let err: RecordError = FormatError {
            field: "age".to_string(),
            input: "dua puluh".to_string(),
        }
        .into();
        assert!(err.is_format());
        assert_eq!(err.field(), "age");
        assert_eq!(err.to_string(), "invalid format: age: 'dua puluh' is not a number");
    }
}
