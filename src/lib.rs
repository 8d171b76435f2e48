// Student Records - Core Library
// Records, roles, validation and the headless form; used by the TUI and tests

pub mod errors;
pub mod record;
pub mod validation;
pub mod store;
pub mod entities;
pub mod form;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use errors::{FormatError, RecordError, ValidationError, ValidationErrorKind};
pub use record::{Record, FIELD_DELIMITER};
pub use validation::{validate, RawStudentInput};
pub use store::RecordStore;
pub use entities::{role_lines, Person, PersonKind, Role, User, UserKind};
pub use form::{FormField, Outcome, StudentForm};
pub use config::{AppConfig, Locale};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
