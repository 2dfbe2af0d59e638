//! Overlay rendering: help and property details

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::app::App;
use super::super::theme::Theme;

/// Centered popup rect, sized as a percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn render_details_popup(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some(prop) = app.focused_property() else {
        return;
    };

    let popup = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup);

    let label = Style::default().fg(theme.subtext0);
    let value = Style::default().fg(theme.text);

    let lines = vec![
        Line::from(Span::styled(
            prop.price_line(),
            Style::default().fg(theme.yellow).bold(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Location      ", label),
            Span::styled(prop.location(), value),
        ]),
        Line::from(vec![
            Span::styled("Specification ", label),
            Span::styled(prop.specification.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Plots         ", label),
            Span::styled(prop.total_plots.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("RERA          ", label),
            Span::styled(prop.rera_number.clone(), value),
        ]),
        Line::default(),
        Line::from(Span::styled(prop.description.clone(), value)),
        Line::default(),
        Line::from(Span::styled(
            prop.map_url.clone(),
            Style::default().fg(theme.blue).underlined(),
        )),
        Line::default(),
        Line::from(Span::styled("Esc/Enter to close", label)),
    ];

    let popup_widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.blue))
                .title(Span::styled(
                    format!(" {} ", prop.name),
                    Style::default().fg(theme.mauve).bold(),
                )),
        );
    frame.render_widget(popup_widget, popup);
}

pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let key_style = Style::default().fg(theme.blue).bold();
    let desc_style = Style::default().fg(theme.text);

    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let lines = vec![
        Line::default(),
        entry("←/h  →/l", "previous / next page (wraps around)"),
        entry("1-9", "jump to page"),
        entry("g / G", "first / last page"),
        entry("Tab / j k", "move card focus"),
        entry("Enter", "property details"),
        entry("b", "book (signed in) / buy enquiry"),
        entry("v", "view details (signed in)"),
        entry("t", "cycle theme"),
        entry("?", "toggle this help"),
        entry("q", "quit"),
        Line::default(),
        Line::from(Span::styled(
            "  Mouse: scroll pages, click dots, arrows and cards",
            Style::default().fg(theme.subtext0),
        )),
    ];

    let help = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.surface1))
                .title(Span::styled(
                    " Help ",
                    Style::default().fg(theme.mauve).bold(),
                )),
        );
    frame.render_widget(help, popup);
}
