//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest column the form and welcome panels occupy
pub const CONTENT_MAX_WIDTH: u16 = 72;

/// Reserve the bottom line for the status bar and return the content area
pub fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Center a column of at most `max_width` columns within `area`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // View-specific hints
    if app.show_hints {
        let hints = get_view_hints(&app.state.current_view);
        spans.push(Span::styled(
            format!(" {hints}"),
            Style::default().fg(Color::Gray),
        ));
    }

    // Outcome of the last action
    if let Some(msg) = &app.state.status_message {
        let color = if app.state.form.errors().is_empty() {
            Color::Green
        } else {
            Color::Yellow
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    // Quit hint on the right
    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Welcome => "Enter:start  q:quit",
        View::Assessment => "Tab/↓:next  ↑:prev  ←/→:choose  Space:toggle  ^S:submit  Esc:cancel",
        View::Submitted => "Enter:new assessment  q:quit",
    }
}
