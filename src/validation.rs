// ✅ Validation - raw form text → Record
//
// Runs before any store mutation. Order of checks:
// 1. required text fields (nim, name) are non-empty
// 2. age parses as an integer (FormatError otherwise)
// 3. age > 0
// A Record is only built once every check passes.

use crate::errors::{FormatError, Result, ValidationError};
use crate::record::Record;

/// Field names as reported in errors
pub const FIELD_NIM: &str = "nim";
pub const FIELD_NAME: &str = "name";
pub const FIELD_AGE: &str = "age";
pub const FIELD_MAJOR: &str = "major";

/// Unvalidated text as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStudentInput {
    pub nim: String,
    pub name: String,
    pub age: String,
    pub major: String,
}

impl RawStudentInput {
    pub fn new(nim: &str, name: &str, age: &str, major: &str) -> Self {
        RawStudentInput {
            nim: nim.to_string(),
            name: name.to_string(),
            age: age.to_string(),
            major: major.to_string(),
        }
    }
}

/// Validate raw input and construct a Record
pub fn validate(raw: &RawStudentInput) -> Result<Record> {
    require(FIELD_NIM, &raw.nim)?;
    require(FIELD_NAME, &raw.name)?;
    let age = parse_integer(FIELD_AGE, &raw.age)?;

    Record::new(raw.nim.as_str(), raw.name.as_str(), age, raw.major.as_str())
}

fn require(field: &str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty(field))
    } else {
        Ok(())
    }
}

/// Parse an integer field; whitespace around the digits is ignored
pub fn parse_integer(field: &str, value: &str) -> std::result::Result<i64, FormatError> {
    value.trim().parse::<i64>().map_err(|_| FormatError {
        field: field.to_string(),
        input: value.to_string(),
    })
}
