// ⚙️ App configuration - locale + window title
//
// Built from command-line arguments; nothing is read from disk.

use anyhow::{anyhow, Result};

pub const DEFAULT_TITLE: &str = "Aplikasi Manajemen Mahasiswa";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Indonesian,
    English,
}

impl Locale {
    pub fn parse(code: &str) -> Result<Self> {
        match code.to_lowercase().as_str() {
            "id" | "in" | "indonesian" => Ok(Locale::Indonesian),
            "en" | "english" => Ok(Locale::English),
            other => Err(anyhow!("unsupported language '{}' (expected: id, en)", other)),
        }
    }

    /// Form label for a field name
    pub fn label(&self, field: &str) -> &'static str {
        match (self, field) {
            (_, "nim") => "NIM",
            (Locale::Indonesian, "name") => "Nama",
            (Locale::Indonesian, "age") => "Umur",
            (Locale::Indonesian, "major") => "Jurusan",
            (Locale::English, "name") => "Name",
            (Locale::English, "age") => "Age",
            (Locale::English, "major") => "Major",
            _ => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub locale: Locale,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            locale: Locale::Indonesian,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Read `--lang <code>` / `--lang=<code>` from the arguments; others are ignored
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = AppConfig::default();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if let Some(code) = arg.strip_prefix("--lang=") {
                config.locale = Locale::parse(code)?;
            } else if arg == "--lang" {
                let code = iter.next().ok_or_else(|| anyhow!("--lang needs a value"))?;
                config.locale = Locale::parse(code)?;
            }
        }

        if config.locale == Locale::English {
            config.title = "Student Management".to_string();
        }

        Ok(config)
    }
}
