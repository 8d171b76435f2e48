// 🎓 Student Record - one row in the store
//
// Identity: identifier (NIM) - fixed at construction
// Values: name, age, classification (major) - classification can change

use crate::errors::{RecordError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter used by the canonical one-line rendering
pub const FIELD_DELIMITER: &str = " | ";

/// A single student record
///
/// Fields are private: the identifier can only be read, the classification
/// only changed through [`Record::set_classification`]. Deserializing goes
/// through [`Record::new`], so invalid input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    identifier: String,
    name: String,
    age: u32,
    classification: String,
}

impl Record {
    /// Build a record, rejecting empty identifier/name and non-positive age
    ///
    /// Surrounding whitespace is trimmed; a field that is blank after
    /// trimming counts as empty.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        age: i64,
        classification: impl Into<String>,
    ) -> Result<Self> {
        let identifier = identifier.into().trim().to_string();
        let name = name.into().trim().to_string();

        if identifier.is_empty() {
            return Err(ValidationError::empty("nim").into());
        }
        if name.is_empty() {
            return Err(ValidationError::empty("name").into());
        }

        Ok(Record {
            identifier,
            name,
            age: positive_age(age)?,
            classification: classification.into().trim().to_string(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn classification(&self) -> &str {
        &self.classification
    }

    pub fn set_classification(&mut self, classification: impl Into<String>) {
        self.classification = classification.into().trim().to_string();
    }
}

/// Unchecked wire shape of a Record
#[derive(Deserialize)]
struct RecordData {
    identifier: String,
    name: String,
    age: i64,
    #[serde(default)]
    classification: String,
}

impl TryFrom<RecordData> for Record {
    type Error = RecordError;

    fn try_from(data: RecordData) -> Result<Self> {
        Record::new(data.identifier, data.name, data.age, data.classification)
    }
}

/// Check that an age is strictly positive and fits the record
pub(crate) fn positive_age(age: i64) -> std::result::Result<u32, ValidationError> {
    if age <= 0 {
        return Err(ValidationError::not_positive("age", age));
    }
    u32::try_from(age).map_err(|_| ValidationError::out_of_range("age", age))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.identifier, FIELD_DELIMITER, self.name, FIELD_DELIMITER, self.age
        )?;
        if !self.classification.is_empty() {
            write!(f, "{}{}", FIELD_DELIMITER, self.classification)?;
        }
        Ok(())
    }
}
