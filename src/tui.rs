//! Interactive catalog browser

pub mod app;
mod event;
mod ui;

use std::io::{self, IsTerminal};

use anyhow::{Result, bail};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::SkillsConfig;
use crate::db::Database;
use app::App;

/// Restores the terminal on drop, including on early return or panic unwind
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the browser until the user quits
pub fn run(catalog: Catalog, db: &Database, config: &SkillsConfig) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; try `skillsmp list`");
    }

    let mut app = App::new(catalog, db, config);
    info!(skills = app.grid.catalog().len(), "starting browser");

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    while app.running {
        terminal.draw(|frame| ui::render(frame, &app))?;
        event::handle_events(&mut app, db)?;
        app.tick();
    }

    terminal.show_cursor()?;
    info!(liked = app.selection.liked().len(), "browser closed");
    Ok(())
}
