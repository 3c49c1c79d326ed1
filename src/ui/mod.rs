//! UI module for rendering the TUI

mod assessment;
mod components;
mod layout;
mod submitted;
mod welcome;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let content = layout::content_area(area);

    // Draw the current view
    match app.state.current_view {
        View::Welcome => welcome::draw(frame, content),
        View::Assessment => assessment::draw(frame, content, app),
        View::Submitted => submitted::draw(frame, content),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Submission-failure dialog overlays everything else
    if let Some(message) = &app.state.submit_error {
        components::render_error_dialog(frame, message);
    }
}
