//! Application state definitions

use super::form::{Field, FormState, Reason, TextField};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    Assessment,
    Submitted,
}

/// Focusable rows on the assessment form: every field plus the Submit button
pub const FORM_ROWS: usize = Field::ALL.len() + 1;

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // The record under edit
    pub form: FormState,

    // Form focus
    pub active_row: usize,
    pub reason_cursor: usize,

    // UI state
    pub status_message: Option<String>,
    pub submit_error: Option<String>,
}

impl AppState {
    /// Field behind the focused row; `None` on the Submit row
    pub fn focused_field(&self) -> Option<Field> {
        Field::ALL.get(self.active_row).copied()
    }

    /// Text field behind the focused row, when it is one
    pub fn focused_text_field(&self) -> Option<TextField> {
        self.focused_field().and_then(Field::as_text)
    }

    pub fn is_submit_row(&self) -> bool {
        self.active_row == FORM_ROWS - 1
    }

    /// Move focus to the next row (wraps)
    pub fn next_row(&mut self) {
        self.active_row = (self.active_row + 1) % FORM_ROWS;
    }

    /// Move focus to the previous row (wraps)
    pub fn prev_row(&mut self) {
        if self.active_row == 0 {
            self.active_row = FORM_ROWS - 1;
        } else {
            self.active_row -= 1;
        }
    }

    /// Jump focus to a field's row
    pub fn focus_field(&mut self, field: Field) {
        if let Some(index) = Field::ALL.iter().position(|f| *f == field) {
            self.active_row = index;
        }
    }

    /// Reason option under the multi-select cursor
    pub fn reason_under_cursor(&self) -> Reason {
        Reason::ALL[self.reason_cursor % Reason::ALL.len()]
    }

    /// Move the reasons cursor right (wraps)
    pub fn reason_cursor_right(&mut self) {
        self.reason_cursor = (self.reason_cursor + 1) % Reason::ALL.len();
    }

    /// Move the reasons cursor left (wraps)
    pub fn reason_cursor_left(&mut self) {
        if self.reason_cursor == 0 {
            self.reason_cursor = Reason::ALL.len() - 1;
        } else {
            self.reason_cursor -= 1;
        }
    }

    /// Discard the record and reset form focus
    pub fn reset_form(&mut self) {
        self.form = FormState::default();
        self.active_row = 0;
        self.reason_cursor = 0;
    }
}
