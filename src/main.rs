// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use student_records::{logging, role_lines, AppConfig, Locale, Person, Role, User, UserKind};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = AppConfig::from_args(&args)?;

    if args.first().map(String::as_str) == Some("roles") {
        logging::init(false);
        run_roles(&config)?;
    } else {
        // UI mode (default)
        logging::init(true);
        run_ui_mode(config)?;
    }

    Ok(())
}

fn run_roles(config: &AppConfig) -> Result<()> {
    for line in role_report(config)? {
        println!("{}", line);
    }
    Ok(())
}

/// Heading plus one "name: role" line per user kind and student kind
fn role_report(config: &AppConfig) -> Result<Vec<String>> {
    let users: Vec<User> = UserKind::all()
        .into_iter()
        .map(|kind| User::new(format!("{:?}", kind), kind))
        .collect();

    let people = vec![
        Person::student("Ana", 20, "A1")?,
        Person::graduate("Budi", 27, "G7", "Sistem Terdistribusi")?,
    ];

    let entities: Vec<&dyn Role> = users
        .iter()
        .map(|u| u as &dyn Role)
        .chain(people.iter().map(|p| p as &dyn Role))
        .collect();

    let heading = match config.locale {
        Locale::Indonesian => "Peran dan hak akses",
        Locale::English => "Roles and access levels",
    };

    let mut lines = vec![format!("{} - {}", config.title, heading)];
    lines.extend(role_lines(&entities).into_iter().map(|line| format!("  {}", line)));
    tracing::debug!(count = entities.len(), "roles listed");

    Ok(lines)
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: AppConfig) -> Result<()> {
    let mut app = ui::App::new(config);
    ui::run_ui(&mut app)?;

    println!("{} records discarded on exit", app.store.len());

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: AppConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or list roles: cargo run -- roles");
    std::process::exit(1);
}
