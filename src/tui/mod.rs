// TUI module for the interactive resource browser
mod app;
mod clock;
mod events;
mod layout;
mod rendering;
mod theme;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
pub use app::App;
use app::STARTUP_DELAY_MS;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::models::Catalog;
use crate::session_store::SessionStore;
use crate::utils::get_config_dir;

/// Puts the terminal into TUI mode; restores it on drop (panic, early return, etc.)
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to initialize terminal")?;

        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best effort cleanup - ignore errors since we may already be unwinding
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive TUI
pub fn run_interactive(catalog: Catalog) -> Result<()> {
    // Open the session before touching the terminal so config errors
    // surface on a normal screen
    let config_dir = get_config_dir()?;
    let session = SessionStore::open(config_dir);
    let mut app = App::new(catalog, session, Duration::from_millis(STARTUP_DELAY_MS));

    let mut guard = TerminalGuard::new()?;
    app.run(&mut guard.terminal)
}
