//! Event handling for the TUI

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

use super::app::App;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle all input events
pub fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        match event::read()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {} // Terminal will redraw automatically
            _ => {}
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Overlays swallow input first
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    if app.show_details_popup {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.close_details_popup();
        }
        return;
    }

    // Clear status message on any key press
    app.clear_status();

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Page navigation with wraparound
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Char('g') | KeyCode::Home => app.first_page(),
        KeyCode::Char('G') | KeyCode::End => app.last_page(),

        // Direct jump, mirroring the dot indicator (1-based on the keyboard)
        KeyCode::Char(c @ '1'..='9') => {
            let page = c as usize - '1' as usize;
            app.go_to_page(page);
        }

        // Card focus within the page
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => app.focus_next_card(),
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => app.focus_prev_card(),

        // Call-to-action on the focused card
        KeyCode::Char('b') => {
            if app.authenticated {
                app.request_booking();
            } else {
                app.request_buy();
            }
        }
        KeyCode::Char('v') => app.request_view(),

        // Details popup
        KeyCode::Enter => app.toggle_details_popup(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Theme cycling
        KeyCode::Char('t') => app.cycle_theme(),

        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: crossterm::event::MouseEvent) {
    // Don't handle mouse while an overlay is up
    if app.show_help || app.show_details_popup {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.prev_page(),
        MouseEventKind::ScrollDown => app.next_page(),
        MouseEventKind::Down(MouseButton::Left) => {
            let x = mouse.column;
            let y = mouse.row;

            if app.is_in_left_arrow(x, y) {
                app.prev_page();
                return;
            }
            if app.is_in_right_arrow(x, y) {
                app.next_page();
                return;
            }

            // Dot indicator jumps directly to a page
            if let Some(page) = app.dot_at(x, y) {
                app.go_to_page(page);
                return;
            }

            if let Some(card) = app.card_at(x, y) {
                app.focus_card(card);
            }
        }
        _ => {}
    }
}
