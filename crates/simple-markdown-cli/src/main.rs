use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use simple_markdown_config::{Config, initial_document};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod buffer;
mod preview;

use app::{Action, App};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let cli_path = match args.len() {
        1 => None,
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [document-path]", args[0]);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let markdown = match initial_document(cli_path.as_deref(), config.as_ref()) {
        Ok(markdown) => markdown,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };
    let document_path = cli_path.or_else(|| config.and_then(|c| c.document_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(markdown, document_path);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && app.handle_key(key) == Action::Quit
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let title = if app.buffer.is_dirty() {
        "MARKDOWN *"
    } else {
        "MARKDOWN"
    };
    let source: Vec<Line> = simple_markdown_engine::split_lines(app.buffer.text())
        .into_iter()
        .map(|line| Line::from(line.to_string()))
        .collect();
    let editor = Paragraph::new(source)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(editor, panes[0]);

    let preview = Paragraph::new(app.preview())
        .block(Block::default().borders(Borders::ALL).title("RENDER"))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, panes[1]);

    let help = Line::from(vec![
        Span::styled(
            "Esc: Quit | Ctrl+S: Save | ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(app.status.clone()),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
