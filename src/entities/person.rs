// 🧑‍🎓 Person Entity - Student / GraduateStudent
//
// Closed set of variants; the role text is a pure function of the variant.

use super::Role;
use crate::errors::ValidationError;
use crate::record::{positive_age, Record};
use crate::validation::{FIELD_NAME, FIELD_NIM};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// PERSON KIND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonKind {
    /// Undergraduate student
    Student { nim: String },

    /// Graduate student working on a thesis
    GraduateStudent { nim: String, thesis: String },
}

impl PersonKind {
    pub fn role(&self) -> &'static str {
        match self {
            PersonKind::Student { .. } => "Mahasiswa S1",
            PersonKind::GraduateStudent { .. } => "Mahasiswa Pascasarjana",
        }
    }

    pub fn nim(&self) -> &str {
        match self {
            PersonKind::Student { nim } | PersonKind::GraduateStudent { nim, .. } => nim,
        }
    }
}

// ============================================================================
// PERSON
// ============================================================================

/// A person with a non-empty name, a NIM and a validated age
///
/// Deserializing goes through [`Person::new`], so invalid input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonData")]
pub struct Person {
    name: String,
    age: u32,
    kind: PersonKind,
}

/// Unchecked wire shape of a Person
#[derive(Deserialize)]
struct PersonData {
    name: String,
    age: i64,
    kind: PersonKind,
}

impl TryFrom<PersonData> for Person {
    type Error = ValidationError;

    fn try_from(data: PersonData) -> Result<Self, ValidationError> {
        Person::new(data.name, data.age, data.kind)
    }
}

impl Person {
    /// Build a person, rejecting a blank name or NIM and a non-positive age
    pub fn new(name: impl Into<String>, age: i64, mut kind: PersonKind) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty(FIELD_NAME));
        }

        match &mut kind {
            PersonKind::Student { nim } | PersonKind::GraduateStudent { nim, .. } => {
                *nim = nim.trim().to_string();
                if nim.is_empty() {
                    return Err(ValidationError::empty(FIELD_NIM));
                }
            }
        }

        Ok(Person {
            name,
            age: positive_age(age)?,
            kind,
        })
    }

    pub fn student(name: impl Into<String>, age: i64, nim: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, age, PersonKind::Student { nim: nim.into() })
    }

    pub fn graduate(
        name: impl Into<String>,
        age: i64,
        nim: impl Into<String>,
        thesis: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            age,
            PersonKind::GraduateStudent {
                nim: nim.into(),
                thesis: thesis.into(),
            },
        )
    }

    /// Undergraduate view of a stored record
    pub fn from_record(record: &Record) -> Self {
        Person {
            name: record.name().to_string(),
            age: record.age(),
            kind: PersonKind::Student {
                nim: record.identifier().to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Change the age; rejects values <= 0 and leaves the old age in place
    pub fn set_age(&mut self, age: i64) -> Result<(), ValidationError> {
        self.age = positive_age(age)?;
        Ok(())
    }

    pub fn kind(&self) -> &PersonKind {
        &self.kind
    }

    pub fn role(&self) -> &'static str {
        self.kind.role()
    }
}

impl Role for Person {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn describe_role(&self) -> &'static str {
        self.role()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.role())
    }
}
