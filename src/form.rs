// 📝 Student Form - headless model of the input form
//
// Holds the raw text of each field and the two handlers the shell binds:
// - submit(): validate → construct → add
// - remove(): remove by the NIM field
// Each handler returns exactly one Outcome and always clears the fields.

use crate::config::Locale;
use crate::errors::{FormatError, RecordError, ValidationError, ValidationErrorKind};
use crate::record::Record;
use crate::store::RecordStore;
use crate::validation::{self, RawStudentInput};
use tracing::{info, warn};

// ============================================================================
// FORM FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Nim,
    Name,
    Age,
    Major,
}

impl FormField {
    pub const ALL: [FormField; 4] = [FormField::Nim, FormField::Name, FormField::Age, FormField::Major];

    /// Field name as used in validation errors
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Nim => validation::FIELD_NIM,
            FormField::Name => validation::FIELD_NAME,
            FormField::Age => validation::FIELD_AGE,
            FormField::Major => validation::FIELD_MAJOR,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Nim => FormField::Name,
            FormField::Name => FormField::Age,
            FormField::Age => FormField::Major,
            FormField::Major => FormField::Nim,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FormField::Nim => FormField::Major,
            FormField::Name => FormField::Nim,
            FormField::Age => FormField::Name,
            FormField::Major => FormField::Age,
        }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of one handler call, shown to the user as a single message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Record),
    Removed { identifier: String, count: usize },
    Invalid(ValidationError),
    BadFormat(FormatError),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Invalid(_) | Outcome::BadFormat(_))
    }

    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (Outcome::Added(record), Locale::Indonesian) => {
                format!("Data berhasil ditambahkan: {}", record)
            }
            (Outcome::Added(record), Locale::English) => format!("Record added: {}", record),

            (Outcome::Removed { identifier, count }, Locale::Indonesian) => {
                format!("Data berhasil dihapus: {} data dengan NIM '{}'", count, identifier)
            }
            (Outcome::Removed { identifier, count }, Locale::English) => {
                format!("Removed {} record(s) with NIM '{}'", count, identifier)
            }

            (Outcome::Invalid(e), _) => {
                let label = locale.label(&e.field);
                match (e.kind, locale) {
                    (ValidationErrorKind::Empty, Locale::Indonesian) => {
                        format!("Data tidak boleh kosong: {}", label)
                    }
                    (ValidationErrorKind::Empty, Locale::English) => {
                        format!("{} must not be empty", label)
                    }
                    (ValidationErrorKind::NotPositive, Locale::Indonesian) => {
                        format!("{} harus lebih dari 0", label)
                    }
                    (ValidationErrorKind::NotPositive, Locale::English) => {
                        format!("{} must be greater than 0", label)
                    }
                    (ValidationErrorKind::OutOfRange, Locale::Indonesian) => {
                        format!("{} terlalu besar", label)
                    }
                    (ValidationErrorKind::OutOfRange, Locale::English) => {
                        format!("{} is too large", label)
                    }
                }
            }

            (Outcome::BadFormat(e), _) => match locale {
                Locale::Indonesian => format!("{} harus berupa angka", locale.label(&e.field)),
                Locale::English => format!("{} must be a number", locale.label(&e.field)),
            },
        }
    }
}

impl From<RecordError> for Outcome {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => Outcome::Invalid(e),
            RecordError::Format(e) => Outcome::BadFormat(e),
        }
    }
}

// ============================================================================
// FORM
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    input: RawStudentInput,
    focus: FormField,
}

impl StudentForm {
    pub fn new() -> Self {
        StudentForm::default()
    }

    pub fn input(&self) -> &RawStudentInput {
        &self.input
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Nim => &self.input.nim,
            FormField::Name => &self.input.name,
            FormField::Age => &self.input.age,
            FormField::Major => &self.input.major,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        *self.value_mut(field) = value.to_string();
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Nim => &mut self.input.nim,
            FormField::Name => &mut self.input.name,
            FormField::Age => &mut self.input.age,
            FormField::Major => &mut self.input.major,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type a character into the focused field
    pub fn push_char(&mut self, c: char) {
        self.value_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.value_mut(self.focus).pop();
    }

    /// Empty every field and move focus back to the first one
    pub fn clear(&mut self) {
        self.input = RawStudentInput::default();
        self.focus = FormField::Nim;
    }

    pub fn is_blank(&self) -> bool {
        self.input == RawStudentInput::default()
    }

    /// "Add" handler: validate the fields and append the record
    pub fn submit(&mut self, store: &mut RecordStore) -> Outcome {
        let form = ClearOnExit(self);

        let outcome = match validation::validate(form.0.input()) {
            Ok(record) => {
                info!(record = %record, "student added");
                store.add(record.clone());
                Outcome::Added(record)
            }
            Err(err) => {
                warn!(error = %err, "submission rejected");
                Outcome::from(err)
            }
        };
        outcome
    }

    /// "Remove" handler: drop every record whose NIM matches the NIM field
    pub fn remove(&mut self, store: &mut RecordStore) -> Outcome {
        let form = ClearOnExit(self);

        let identifier = form.0.input().nim.trim().to_string();
        let count = store.remove_by_identifier(&identifier);
        info!(identifier = %identifier, count, "students removed");

        Outcome::Removed { identifier, count }
    }
}

/// Clears the form when dropped, on every exit path of a handler
struct ClearOnExit<'a>(&'a mut StudentForm);

impl Drop for ClearOnExit<'_> {
    fn drop(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut StudentForm, nim: &str, name: &str, age: &str, major: &str) {
        form.set_value(FormField::Nim, nim);
        form.set_value(FormField::Name, name);
        form.set_value(FormField::Age, age);
        form.set_value(FormField::Major, major);
    }

    #[test]
    fn test_submit_valid_appends_last() {
        let mut store = RecordStore::new();
        let mut form = StudentForm::new();

        fill(&mut form, "A1", "Ana", "20", "Informatika");
        assert!(matches!(form.submit(&mut store), Outcome::Added(_)));

        fill(&mut form, "B2", "Bo", "22", "");
        let outcome = form.submit(&mut store);

        let last = store.all().last().unwrap();
        assert_eq!(outcome, Outcome::Added(last.clone()));
        assert_eq!(last.identifier(), "B2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_submit_empty_field_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        let mut form = StudentForm::new();

        fill(&mut form, "", "Bo", "20", "");
        let outcome = form.submit(&mut store);

        assert!(matches!(outcome, Outcome::Invalid(ref e) if e.field == "nim"));
        assert!(outcome.is_error());
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_bad_age_format() {
        let mut store = RecordStore::new();
        let mut form = StudentForm::new();

        fill(&mut form, "A1", "Ana", "dua puluh", "");
        let outcome = form.submit(&mut store);

        assert!(matches!(outcome, Outcome::BadFormat(ref e) if e.field == "age"));
        assert_eq!(outcome.message(Locale::Indonesian), "Umur harus berupa angka");
        assert_eq!(outcome.message(Locale::English), "Age must be a number");
        assert!(store.is_empty());
    }

    #[test]
    fn test_fields_cleared_on_every_path() {
        let mut store = RecordStore::new();
        let mut form = StudentForm::new();

        for (nim, name, age) in [("A1", "Ana", "20"), ("", "Bo", "20"), ("A2", "Cat", "x"), ("A3", "Dan", "-1")] {
            fill(&mut form, nim, name, age, "Fisika");
            form.focus_next();
            form.submit(&mut store);

            assert!(form.is_blank());
            assert_eq!(form.focus(), FormField::Nim);
        }

        fill(&mut form, "A1", "", "", "");
        form.remove(&mut store);
        assert!(form.is_blank());
    }

    #[test]
    fn test_remove_by_nim_field() {
        let mut store = RecordStore::new();
        let mut form = StudentForm::new();

        fill(&mut form, "A1", "Ana", "20", "");
        form.submit(&mut store);
        fill(&mut form, "B2", "Bo", "21", "");
        form.submit(&mut store);

        form.set_value(FormField::Nim, " A1 ");
        let outcome = form.remove(&mut store);

        assert_eq!(
            outcome,
            Outcome::Removed {
                identifier: "A1".to_string(),
                count: 1
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].identifier(), "B2");
    }

    #[test]
    fn test_scenario() {
        let mut store = RecordStore::new();
        let mut form = StudentForm::new();

        fill(&mut form, "A1", "Ana", "20", "");
        assert!(!form.submit(&mut store).is_error());
        let rendered: Vec<String> = store.all().iter().map(|r| r.to_string()).collect();
        assert_eq!(rendered, vec!["A1 | Ana | 20"]);

        fill(&mut form, "", "Bo", "20", "");
        assert!(matches!(form.submit(&mut store), Outcome::Invalid(_)));
        assert_eq!(store.len(), 1);

        fill(&mut form, "A2", "Cat", "-5", "");
        let outcome = form.submit(&mut store);
        assert!(matches!(outcome, Outcome::Invalid(ref e) if e.field == "age"));
        assert_eq!(outcome.message(Locale::Indonesian), "Umur harus lebih dari 0");
        assert_eq!(store.len(), 1);

        form.set_value(FormField::Nim, "A1");
        form.remove(&mut store);
        assert!(store.is_empty());

        form.set_value(FormField::Nim, "A1");
        let outcome = form.remove(&mut store);
        assert!(!outcome.is_error());
        assert!(store.is_empty());
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut form = StudentForm::new();

        for c in "A1".chars() {
            form.push_char(c);
        }
        form.focus_next();
        for c in "Anna".chars() {
            form.push_char(c);
        }
        form.backspace();
        form.focus_previous();
        form.focus_previous();
        assert_eq!(form.focus(), FormField::Major);

        assert_eq!(form.value(FormField::Nim), "A1");
        assert_eq!(form.value(FormField::Name), "Ann");
        assert_eq!(form.value(FormField::Major), "");
    }

    #[test]
    fn test_age_too_large_has_own_message() {
        let mut store = RecordStore::new();
        let mut form = StudentForm::new();

        fill(&mut form, "A1", "Ana", "99999999999", "");
        let outcome = form.submit(&mut store);

        assert!(matches!(outcome, Outcome::Invalid(ref e) if e.kind == ValidationErrorKind::OutOfRange));
        assert_eq!(outcome.message(Locale::Indonesian), "Umur terlalu besar");
        assert_eq!(outcome.message(Locale::English), "Age is too large");
        assert!(store.is_empty());

        fill(&mut form, "A1", "Ana", "0", "");
        let outcome = form.submit(&mut store);
        assert_eq!(outcome.message(Locale::English), "Age must be greater than 0");
    }

    #[test]
    fn test_messages() {
        let record = Record::new("A1", "Ana", 20, "").unwrap();
        assert_eq!(
            Outcome::Added(record.clone()).message(Locale::Indonesian),
            "Data berhasil ditambahkan: A1 | Ana | 20"
        );
        assert_eq!(Outcome::Added(record).message(Locale::English), "Record added: A1 | Ana | 20");

        let empty = Outcome::Invalid(ValidationError::empty("name"));
        assert_eq!(empty.message(Locale::Indonesian), "Data tidak boleh kosong: Nama");
        assert_eq!(empty.message(Locale::English), "Name must not be empty");

        let removed = Outcome::Removed {
            identifier: "A1".to_string(),
            count: 2,
        };
        assert_eq!(removed.message(Locale::English), "Removed 2 record(s) with NIM 'A1'");
    }
}
