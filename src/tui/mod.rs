//! Interactive carousel TUI

use std::io;

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

/// Run the carousel until the user quits. The terminal is always restored,
/// including when the loop errors out.
pub fn run(app: &mut App) -> Result<()> {
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run_loop(&mut terminal, app);

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;
        event::handle_events(app)?;
    }
    Ok(())
}
