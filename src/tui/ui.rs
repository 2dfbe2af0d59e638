//! UI rendering for the TUI
//!
//! Layout: a title header, the card row flanked by arrow gutters, the dot
//! indicator, and a one-line footer. Overlays (help, property details) are
//! drawn last.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use super::theme::Theme;

mod cards;
mod overlays;

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = *app.theme_variant.theme();
    let area = frame.area();

    // Main layout: header, card row, dots, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Card row
            Constraint::Length(1), // Dot indicator
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, &theme, chunks[0]);
    render_carousel(frame, app, &theme, chunks[1]);
    render_dots(frame, app, &theme, chunks[2]);
    render_footer(frame, app, &theme, chunks[3]);

    // Overlays (in order of priority)
    if app.show_details_popup {
        overlays::render_details_popup(frame, app, &theme, area);
    }

    if app.show_help {
        overlays::render_help_overlay(frame, &theme, area);
    }
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "FEATURED PROPERTIES",
        Style::default().fg(theme.text).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface1))
            .title(Span::styled(
                " plotdeck ",
                Style::default().fg(theme.mauve).bold(),
            )),
    );
    frame.render_widget(title, area);
}

fn render_carousel(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    if app.pager.is_empty() {
        app.last_card_areas.clear();
        app.last_left_arrow_area = None;
        app.last_right_arrow_area = None;

        let message = Paragraph::new("No properties to show")
            .style(Style::default().fg(theme.subtext0))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.surface1)),
            );
        frame.render_widget(message, area);
        return;
    }

    let visible = app.visible_properties().to_vec();
    let page_size = app.pager.page_size();

    // Arrow gutters on both sides, cards split the middle evenly. Slots stay
    // reserved on a ragged final page so cards don't jump around.
    let mut constraints = vec![Constraint::Length(3)];
    for _ in 0..page_size {
        constraints.push(Constraint::Ratio(1, page_size as u32));
    }
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let left = chunks[0];
    let right = chunks[chunks.len() - 1];
    render_arrow(frame, "◀", theme, left);
    render_arrow(frame, "▶", theme, right);
    app.last_left_arrow_area = Some((left.x, left.y, left.width, left.height));
    app.last_right_arrow_area = Some((right.x, right.y, right.width, right.height));

    app.last_card_areas.clear();
    for (i, prop) in visible.iter().enumerate() {
        let slot = chunks[i + 1];
        cards::render_card(
            frame,
            prop,
            slot,
            i == app.focused_card,
            app.authenticated,
            theme,
        );
        app.last_card_areas
            .push((slot.x, slot.y, slot.width, slot.height));
    }
}

fn render_arrow(frame: &mut Frame, glyph: &str, theme: &Theme, area: Rect) {
    // Vertically centered single glyph
    let pad = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); pad as usize];
    lines.push(Line::from(Span::styled(
        glyph,
        Style::default().fg(theme.blue).bold(),
    )));
    let arrow = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(arrow, area);
}

fn render_dots(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let total = app.pager.total_pages();
    if total == 0 {
        app.last_dots_area = None;
        return;
    }

    let mut spans = Vec::with_capacity(total);
    for page in 0..total {
        let style = if page == app.pager.current_page() {
            Style::default().fg(theme.blue).bold()
        } else {
            Style::default().fg(theme.surface1)
        };
        spans.push(Span::styled("● ", style));
    }

    // Render into a centered sub-rect so clicks map back to dot indices
    let width = (total * 2) as u16;
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let dots_area = Rect::new(x, area.y, width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), dots_area);
    app.last_dots_area = Some((dots_area.x, dots_area.y, dots_area.width, dots_area.height));
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    // Status message takes over the footer when present
    if let Some(status) = &app.status_message {
        let color = if status.is_error {
            theme.red
        } else {
            theme.green
        };
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        )));
        frame.render_widget(line, area);
        return;
    }

    let auth_badge = if app.authenticated {
        Span::styled(" Signed in ", Style::default().fg(theme.green).bold())
    } else {
        Span::styled(" Guest ", Style::default().fg(theme.subtext0))
    };

    let page_info = if app.pager.is_empty() {
        String::new()
    } else {
        format!(
            "Page {}/{}  ",
            app.pager.current_page() + 1,
            app.pager.total_pages()
        )
    };

    let hints = "←/→ page  Tab card  Enter details  ?: help  q: quit";
    let line = Line::from(vec![
        auth_badge,
        Span::styled("│ ", Style::default().fg(theme.surface1)),
        Span::styled(page_info, Style::default().fg(theme.text)),
        Span::styled(hints, Style::default().fg(theme.subtext0)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
