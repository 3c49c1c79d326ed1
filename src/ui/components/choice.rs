//! Radio and checkbox rendering for choice fields

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a radio group with one option per row
pub fn draw_radio_list(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(&str, bool)],
    is_active: bool,
    error: Option<&str>,
) {
    let lines: Vec<Line> = options
        .iter()
        .map(|(text, checked)| {
            let marker = if *checked { "(•)" } else { "( )" };
            Line::from(Span::styled(
                format!("{marker} {text}"),
                option_style(*checked, is_active),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(field_block(label, is_active, error));
    frame.render_widget(paragraph, area);
}

/// Draw a radio group with all options on a single row
pub fn draw_radio_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(&str, bool)],
    is_active: bool,
    error: Option<&str>,
) {
    let mut spans = Vec::new();
    for (text, checked) in options {
        let marker = if *checked { "(•)" } else { "( )" };
        spans.push(Span::styled(
            format!(" {marker} {text} "),
            option_style(*checked, is_active),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(field_block(label, is_active, error));
    frame.render_widget(paragraph, area);
}

/// Draw a checkbox group with a movable cursor while the field is active
pub fn draw_checkbox_list(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(&str, bool)],
    cursor: Option<usize>,
    is_active: bool,
    error: Option<&str>,
) {
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, (text, checked))| {
            let marker = if *checked { "[x]" } else { "[ ]" };
            let pointer = if cursor == Some(idx) { "› " } else { "  " };
            let style = if cursor == Some(idx) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                option_style(*checked, is_active)
            };
            Line::from(Span::styled(format!("{pointer}{marker} {text}"), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(field_block(label, is_active, error));
    frame.render_widget(paragraph, area);
}

fn option_style(checked: bool, is_active: bool) -> Style {
    if checked && is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if checked || is_active {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Bordered block shared by every choice field, with the validation
/// message pinned to the bottom border when present
fn field_block(label: &str, is_active: bool, error: Option<&str>) -> Block<'static> {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}
