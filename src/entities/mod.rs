// Entity Models - role-bearing people and app users
//
// Each hierarchy is a closed enum of variants. The shared Role trait lets
// callers list people and users side by side.

pub mod person;
pub mod user;

pub use person::{Person, PersonKind};
pub use user::{User, UserKind};

/// Anything with a name and a human-readable role/access description
pub trait Role {
    fn display_name(&self) -> &str;

    fn describe_role(&self) -> &'static str;
}

/// One line per entity: "name: role"
pub fn role_lines(entities: &[&dyn Role]) -> Vec<String> {
    entities
        .iter()
        .map(|e| format!("{}: {}", e.display_name(), e.describe_role()))
        .collect()
}
