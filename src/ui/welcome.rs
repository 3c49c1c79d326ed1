//! Welcome screen with the program pitch

use super::layout::{self, CONTENT_MAX_WIDTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Build the welcome copy with styling
fn build_welcome_text() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "LEARNAI",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Transform Your Career with AI",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Join our comprehensive AI training program designed for non-technical"),
        Line::from("professionals. Gain the skills you need to thrive in the AI era."),
        Line::from(""),
        Line::from(Span::styled(
            "Take Free Assessment",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(note("Note: We value serious learners who are genuinely committed. Spammers")),
        Line::from(note("or dishonest submissions will be blocked from our LEARN AI coaching")),
        Line::from(note("program. We respect the time and dedication of those wanting to")),
        Line::from(note("transform their careers.")),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to begin"),
        ]),
    ]
}

fn note(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

/// Draw the welcome screen
pub fn draw(frame: &mut Frame, area: Rect) {
    let column = layout::centered_column(area, CONTENT_MAX_WIDTH);

    let lines = build_welcome_text();
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
