use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use student_records::{AppConfig, FormField, Locale, Outcome, Person, RecordStore, StudentForm};

/// Last message shown to the user
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
    pub at: DateTime<Local>,
}

pub struct App {
    pub config: AppConfig,
    pub store: RecordStore,
    pub form: StudentForm,
    pub state: TableState,
    pub status: Option<StatusLine>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: RecordStore::new(),
            form: StudentForm::new(),
            state: TableState::default(),
            status: None,
        }
    }

    pub fn submit(&mut self) {
        let outcome = self.form.submit(&mut self.store);
        self.show(outcome);
    }

    pub fn remove(&mut self) {
        let outcome = self.form.remove(&mut self.store);
        self.show(outcome);
    }

    fn show(&mut self, outcome: Outcome) {
        self.status = Some(StatusLine {
            text: outcome.message(self.config.locale),
            is_error: outcome.is_error(),
            at: Local::now(),
        });

        // Keep the selection on a row that still exists
        if self.store.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(self.store.len() - 1));
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if ctrl => return Ok(()),
                KeyCode::Char('d') if ctrl => app.remove(),
                KeyCode::Enter => app.submit(),
                KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
                KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
                KeyCode::Backspace => app.form.backspace(),
                KeyCode::Char(c) if !ctrl => app.form.push_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Form
            Constraint::Min(0),    // Record list
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_form(f, chunks[1], app);
    render_table(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let count_label = match app.config.locale {
        Locale::Indonesian => "Jumlah data",
        Locale::English => "Records",
    };

    let header_text = vec![Line::from(vec![
        Span::styled(
            app.config.title.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{}: {}", count_label, app.store.len()),
            Style::default().fg(Color::White),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let locale = app.config.locale;

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| {
            let focused = *field == app.form.focus();
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            let mut spans = vec![
                Span::raw(if focused { " → " } else { "   " }),
                Span::styled(format!("{:<8}", locale.label(field.key())), label_style),
                Span::raw(": "),
                Span::raw(app.form.value(*field).to_string()),
            ];
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        })
        .collect();

    let title = match locale {
        Locale::Indonesian => " Form Mahasiswa ",
        Locale::English => " Student Form ",
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );

    f.render_widget(form, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let locale = app.config.locale;
    let headers = [
        locale.label("nim"),
        locale.label("name"),
        locale.label("age"),
        locale.label("major"),
        "Role",
    ];

    let header_cells = headers.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.store.all().iter().map(|record| {
        let cells = vec![
            Cell::from(record.identifier().to_string()),
            Cell::from(truncate(record.name(), 28)),
            Cell::from(record.age().to_string()),
            Cell::from(truncate(record.classification(), 22)),
            Cell::from(Person::from_record(record).role()).style(Style::default().fg(Color::Green)),
        ];

        Row::new(cells).height(1)
    });

    let title = match locale {
        Locale::Indonesian => " Data Mahasiswa ",
        Locale::English => " Students ",
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(30),
            Constraint::Length(6),
            Constraint::Length(24),
            Constraint::Length(24),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if let Some(status) = &app.status {
        let color = if status.is_error { Color::Red } else { Color::Green };
        status_spans.push(Span::styled(
            format!(" [{}] ", status.at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
        status_spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
        status_spans.push(Span::raw(" | "));
    }

    let (add, remove, quit) = match app.config.locale {
        Locale::Indonesian => (" Tambah | ", " Hapus (NIM) | ", " Keluar"),
        Locale::English => (" Add | ", " Remove (NIM) | ", " Quit"),
    };

    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(add));
    status_spans.push(Span::styled("Ctrl-D", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(remove));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Field | "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(quit));

    let status_text = vec![Line::from(status_spans)];

    let status_bar = Paragraph::new(status_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_submit_sets_status() {
        let mut app = App::new(AppConfig::default());

        for (field, value) in [
            (FormField::Nim, "A1"),
            (FormField::Name, "Ana"),
            (FormField::Age, "20"),
        ] {
            app.form.set_value(field, value);
        }
        app.submit();

        let status = app.status.clone().unwrap();
        assert!(!status.is_error);
        assert_eq!(status.text, "Data berhasil ditambahkan: A1 | Ana | 20");
        assert_eq!(app.state.selected(), Some(0));
        assert!(app.form.is_blank());
    }

    #[test]
    fn test_app_error_and_remove() {
        let mut app = App::new(AppConfig::default());

        app.form.set_value(FormField::Name, "Bo");
        app.submit();
        assert!(app.status.as_ref().unwrap().is_error);
        assert!(app.store.is_empty());
        assert_eq!(app.state.selected(), None);

        app.form.set_value(FormField::Nim, "A1");
        app.remove();
        assert!(!app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Ana", 10), "Ana");
        assert_eq!(truncate("Teknik Informatika", 10), "Teknik ...");
    }
}
