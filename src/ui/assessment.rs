//! Assessment form rendering

use super::components::{
    draw_checkbox_list, draw_radio_list, draw_radio_row, draw_text_field, render_button,
    BUTTON_HEIGHT,
};
use super::layout::{self, CONTENT_MAX_WIDTH};
use crate::app::App;
use crate::state::{Field, ImportanceRating, InvestmentRange, Reason, TimeCommitment, FORM_ROWS};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Row heights in form order: five text fields, the four choice fields,
/// then the submit button
const ROW_HEIGHTS: [u16; FORM_ROWS] = [3, 3, 3, 3, 3, 5, 3, 6, 5, BUTTON_HEIGHT];

/// Draw the assessment form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let column = layout::centered_column(area, CONTENT_MAX_WIDTH);

    let block = Block::default()
        .title(" AI Readiness Assessment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(column);
    frame.render_widget(block, column);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let total: u16 = ROW_HEIGHTS.iter().sum();
    let offset = scroll_offset(total, inner.height, app.state.active_row);

    let mut top = 0u16;
    for (row, height) in ROW_HEIGHTS.iter().copied().enumerate() {
        let row_top = top;
        top += height;

        // Rows that do not fit the window entirely are skipped
        if row_top < offset || row_top + height > offset + inner.height {
            continue;
        }

        let rect = Rect {
            x: inner.x,
            y: inner.y + (row_top - offset),
            width: inner.width,
            height,
        };
        draw_row(frame, rect, row, app);
    }

    draw_scroll_markers(frame, column, offset, total, inner.height);
}

/// First content line of the scroll window, chosen so the active row is
/// fully visible and roughly centered
fn scroll_offset(total: u16, viewport: u16, active_row: usize) -> u16 {
    if total <= viewport {
        return 0;
    }

    let row_top: u16 = ROW_HEIGHTS[..active_row].iter().sum();
    let row_height = ROW_HEIGHTS.get(active_row).copied().unwrap_or(0);
    let centered = (row_top + row_height / 2).saturating_sub(viewport / 2);
    centered.min(total - viewport)
}

fn draw_row(frame: &mut Frame, area: Rect, row: usize, app: &App) {
    let form = &app.state.form;
    let errors = form.errors();
    let is_active = app.state.active_row == row;

    let Some(field) = Field::ALL.get(row).copied() else {
        render_button(frame, area, "Submit Assessment", is_active);
        return;
    };

    if let Some(text) = field.as_text() {
        draw_text_field(frame, area, text, form, is_active);
        return;
    }

    match field {
        Field::TimeCommitment => {
            let options: Vec<(&str, bool)> = TimeCommitment::ALL
                .iter()
                .map(|option| (option.label(), form.time_commitment() == Some(*option)))
                .collect();
            draw_radio_list(
                frame,
                area,
                field.label(),
                &options,
                is_active,
                errors.get(field),
            );
        }
        Field::Importance => {
            let options: Vec<(&str, bool)> = ImportanceRating::ALL
                .iter()
                .map(|option| (option.as_str(), form.importance() == Some(*option)))
                .collect();
            draw_radio_row(
                frame,
                area,
                field.label(),
                &options,
                is_active,
                errors.get(field),
            );
        }
        Field::Reasons => {
            let options: Vec<(&str, bool)> = Reason::ALL
                .iter()
                .map(|reason| (reason.label(), form.reasons().contains(*reason)))
                .collect();
            let cursor = is_active.then_some(app.state.reason_cursor);
            draw_checkbox_list(
                frame,
                area,
                field.label(),
                &options,
                cursor,
                is_active,
                errors.get(field),
            );
        }
        Field::InvestmentRange => {
            let options: Vec<(&str, bool)> = InvestmentRange::ALL
                .iter()
                .map(|option| (option.label(), form.investment_range() == Some(*option)))
                .collect();
            draw_radio_list(
                frame,
                area,
                field.label(),
                &options,
                is_active,
                errors.get(field),
            );
        }
        _ => {}
    }
}

/// Indicate content above or below the scroll window
fn draw_scroll_markers(frame: &mut Frame, column: Rect, offset: u16, total: u16, viewport: u16) {
    const MARKER_WIDTH: u16 = 8;
    if column.width < MARKER_WIDTH + 2 || column.height < 2 {
        return;
    }

    let x = column.x + column.width - MARKER_WIDTH - 2;
    if offset > 0 {
        let marker = Paragraph::new(Span::styled(
            " ▲ more ",
            Style::default().fg(Color::DarkGray),
        ));
        let rect = Rect {
            x,
            y: column.y,
            width: MARKER_WIDTH,
            height: 1,
        };
        frame.render_widget(marker, rect);
    }
    if offset + viewport < total {
        let marker = Paragraph::new(Span::styled(
            " ▼ more ",
            Style::default().fg(Color::DarkGray),
        ));
        let rect = Rect {
            x,
            y: column.y + column.height - 1,
            width: MARKER_WIDTH,
            height: 1,
        };
        frame.render_widget(marker, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scrolling {
        use super::*;

        fn total() -> u16 {
            ROW_HEIGHTS.iter().sum()
        }

        #[test]
        fn test_short_form_never_scrolls() {
            assert_eq!(scroll_offset(total(), total() + 3, 9), 0);
        }

        #[test]
        fn test_first_row_pins_window_to_top() {
            assert_eq!(scroll_offset(total(), 20, 0), 0);
        }

        #[test]
        fn test_last_row_pins_window_to_bottom() {
            assert_eq!(scroll_offset(total(), 20, FORM_ROWS - 1), total() - 20);
        }

        #[test]
        fn test_active_row_always_fully_inside_window() {
            let viewport = 12;
            for row in 0..FORM_ROWS {
                let offset = scroll_offset(total(), viewport, row);
                let top: u16 = ROW_HEIGHTS[..row].iter().sum();
                let bottom = top + ROW_HEIGHTS[row];
                assert!(top >= offset, "row {row} clipped above the window");
                assert!(bottom <= offset + viewport, "row {row} clipped below");
            }
        }
    }
}
