use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

mod app;
mod export;
mod model;
mod ui;

use app::App;
use export::export_snapshot;
use ui::ui;

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::default();
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if handle_key(&mut app, key)? {
                return Ok(());
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    if app.entry.is_some() {
        handle_entry_key(app, key);
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('d') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
            app.nudge(10.0)
        }
        KeyCode::Char('u') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
            app.nudge(-10.0)
        }
        KeyCode::Right | KeyCode::Char('l') => app.nudge(1.0),
        KeyCode::Left | KeyCode::Char('h') => app.nudge(-1.0),
        KeyCode::Enter | KeyCode::Char('i') => app.begin_entry(),
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let filename = "mortgage_snapshot.json";
            match export_snapshot(&app.params, filename) {
                Ok(_) => {
                    app.status = Some(format!("Exported to {}", filename));
                }
                Err(e) => {
                    app.status = Some(format!("Error exporting snapshot: {}", e));
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_entry_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_numeric() || c == '.' || c == '-' => {
            app.push_entry(c);
        }
        KeyCode::Backspace => {
            app.pop_entry();
        }
        KeyCode::Enter => {
            app.commit_entry();
        }
        KeyCode::Esc => {
            app.cancel_entry();
        }
        _ => {}
    }
}
