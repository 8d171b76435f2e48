// 🔑 User Entity - access levels for app users

use super::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserKind {
    /// Plain user, no special rights
    General,

    /// Can add and remove records
    Admin,

    /// Student account, read-only
    MahasiswaUser,
}

impl UserKind {
    pub fn access_level(&self) -> &'static str {
        match self {
            UserKind::General => "Akses umum",
            UserKind::Admin => "Admin: tambah & hapus data",
            UserKind::MahasiswaUser => "Mahasiswa: lihat data",
        }
    }

    pub fn all() -> [UserKind; 3] {
        [UserKind::General, UserKind::Admin, UserKind::MahasiswaUser]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub kind: UserKind,
}

impl User {
    pub fn new(name: impl Into<String>, kind: UserKind) -> Self {
        User {
            name: name.into(),
            kind,
        }
    }

    pub fn admin(name: impl Into<String>) -> Self {
        Self::new(name, UserKind::Admin)
    }

    pub fn mahasiswa(name: impl Into<String>) -> Self {
        Self::new(name, UserKind::MahasiswaUser)
    }

    pub fn access_level(&self) -> &'static str {
        self.kind.access_level()
    }
}

impl Role for User {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn describe_role(&self) -> &'static str {
        self.access_level()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.name, self.access_level())
    }
}
