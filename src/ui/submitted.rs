//! Confirmation screen shown after a successful submission

use super::layout::{self, CONTENT_MAX_WIDTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Build the confirmation copy with styling
fn build_confirmation_text() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "✓ Assessment submitted successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Thank you for your interest in the program."),
        Line::from("Our team will review your answers and be in touch soon."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to start another assessment"),
        ]),
    ]
}

/// Draw the confirmation screen
pub fn draw(frame: &mut Frame, area: Rect) {
    let column = layout::centered_column(area, CONTENT_MAX_WIDTH);

    let lines = build_confirmation_text();
    let height = (lines.len() as u16).min(column.height);
    let panel = Rect {
        x: column.x,
        y: column.y + (column.height.saturating_sub(height)) / 2,
        width: column.width,
        height,
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, panel);
}
