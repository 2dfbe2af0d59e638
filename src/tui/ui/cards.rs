//! Property card rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::Property;

use super::super::theme::Theme;

/// Render one property card into its slot
pub fn render_card(
    frame: &mut Frame,
    prop: &Property,
    area: Rect,
    focused: bool,
    authenticated: bool,
    theme: &Theme,
) {
    let border_color = if focused { theme.blue } else { theme.surface1 };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if focused {
        block = block.title_bottom(Line::from(Span::styled(
            " Enter: details ",
            Style::default().fg(theme.subtext0),
        )));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            prop.price_line(),
            Style::default().fg(theme.yellow).bold(),
        )),
        Line::from(Span::styled(
            prop.name.clone(),
            Style::default().fg(theme.text).bold(),
        )),
        Line::from(Span::styled(
            prop.location(),
            Style::default().fg(theme.subtext0),
        )),
        Line::from(Span::styled(
            prop.spec_line(),
            Style::default().fg(theme.subtext0),
        )),
        Line::default(),
    ];
    lines.push(cta_line(authenticated, theme));

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(card, area);
}

/// Call-to-action row: signed-in viewers can book or view, guests get a
/// single buy button.
fn cta_line(authenticated: bool, theme: &Theme) -> Line<'static> {
    if authenticated {
        Line::from(vec![
            Span::styled("[ Book ]", Style::default().fg(theme.green).bold()),
            Span::raw("  "),
            Span::styled("[ View ]", Style::default().fg(theme.blue).bold()),
        ])
    } else {
        Line::from(Span::styled(
            "[ Buy ]",
            Style::default().fg(theme.peach).bold(),
        ))
    }
}
