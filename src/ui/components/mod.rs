//! Reusable UI components

mod button;
mod choice;
mod dialog;
mod field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use choice::{draw_checkbox_list, draw_radio_list, draw_radio_row};
pub use dialog::render_error_dialog;
pub use field::draw_text_field;
