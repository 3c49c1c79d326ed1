//! Application state and core logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

use crate::config::TuiConfig;
use crate::state::{
    AppState, ChoiceValue, Field, ImportanceRating, InvestmentRange, TimeCommitment, View,
};
use crate::submit::{LogSink, SubmissionSink};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where accepted assessments are delivered
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Whether to render key hints in the status bar
    pub show_hints: bool,
    /// Session id attached to submission logs
    session_id: Uuid,
}

impl App {
    /// Create a new App instance delivering to the journaling sink
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    /// Create an App delivering submissions to `sink`
    pub fn with_sink(config: &TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let mut state = AppState::default();
        if config.skip_welcome.unwrap_or(false) {
            state.current_view = View::Assessment;
        }
        let session_id = Uuid::new_v4();
        tracing::info!(session = %session_id, "session started");

        Self {
            state,
            sink,
            quit: false,
            show_hints: config.show_hints.unwrap_or(true),
            session_id,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Transient status feedback lives until the next keypress
        self.state.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Submission-failure dialog is modal: only dismissal gets through
        if self.state.submit_error.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.submit_error = None;
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Welcome => self.handle_welcome_key(key),
            View::Assessment => self.handle_assessment_key(key).await,
            View::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    /// Handle keys on the welcome screen
    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.state.reset_form();
                self.state.current_view = View::Assessment;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys on the post-submission screen
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.state.reset_form();
                self.state.current_view = View::Assessment;
            }
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.state.current_view = View::Welcome,
            _ => {}
        }
    }

    /// Handle keys on the assessment form
    async fn handle_assessment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_row(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_row(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_assessment().await;
            }
            KeyCode::Esc => {
                // Abandoning discards the record
                self.state.reset_form();
                self.state.current_view = View::Welcome;
            }
            KeyCode::Enter => {
                if self.state.is_submit_row() {
                    self.submit_assessment().await;
                } else {
                    self.state.next_row();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.focused_text_field() {
                    let mut value = self.state.form.text(field).to_string();
                    value.pop();
                    self.state.form = self.state.form.with_text(field, value);
                }
            }
            KeyCode::Left => self.choice_left(),
            KeyCode::Right => self.choice_right(),
            KeyCode::Char(c) => self.handle_form_char(c),
            _ => {}
        }
    }

    /// Route a printable character: text input, a digit shortcut, or the
    /// reasons Space toggle
    fn handle_form_char(&mut self, c: char) {
        let Some(field) = self.state.focused_field() else {
            return; // Submit row ignores typing
        };

        if let Some(text) = field.as_text() {
            let mut value = self.state.form.text(text).to_string();
            value.push(c);
            self.state.form = self.state.form.with_text(text, value);
            return;
        }

        match field {
            Field::TimeCommitment => {
                if let Some(choice) = TimeCommitment::from_digit(c) {
                    self.select(ChoiceValue::TimeCommitment(choice));
                }
            }
            Field::Importance => {
                if let Some(choice) = ImportanceRating::from_digit(c) {
                    self.select(ChoiceValue::Importance(choice));
                }
            }
            Field::InvestmentRange => {
                if let Some(choice) = InvestmentRange::from_digit(c) {
                    self.select(ChoiceValue::InvestmentRange(choice));
                }
            }
            Field::Reasons => {
                if c == ' ' {
                    let reason = self.state.reason_under_cursor();
                    let checked = !self.state.form.reasons().contains(reason);
                    self.state.form = self.state.form.with_reason(reason, checked);
                }
            }
            _ => {}
        }
    }

    fn select(&mut self, choice: ChoiceValue) {
        self.state.form = self.state.form.with_choice(choice);
    }

    /// Left on a choice row: cycle the radio selection back, or move the
    /// reasons cursor
    fn choice_left(&mut self) {
        match self.state.focused_field() {
            Some(Field::TimeCommitment) => {
                let next = cycle_back(&TimeCommitment::ALL, self.state.form.time_commitment());
                self.select(ChoiceValue::TimeCommitment(next));
            }
            Some(Field::Importance) => {
                let next = cycle_back(&ImportanceRating::ALL, self.state.form.importance());
                self.select(ChoiceValue::Importance(next));
            }
            Some(Field::InvestmentRange) => {
                let next = cycle_back(&InvestmentRange::ALL, self.state.form.investment_range());
                self.select(ChoiceValue::InvestmentRange(next));
            }
            Some(Field::Reasons) => self.state.reason_cursor_left(),
            _ => {}
        }
    }

    /// Right on a choice row: cycle the radio selection forward, or move the
    /// reasons cursor
    fn choice_right(&mut self) {
        match self.state.focused_field() {
            Some(Field::TimeCommitment) => {
                let next = cycle_forward(&TimeCommitment::ALL, self.state.form.time_commitment());
                self.select(ChoiceValue::TimeCommitment(next));
            }
            Some(Field::Importance) => {
                let next = cycle_forward(&ImportanceRating::ALL, self.state.form.importance());
                self.select(ChoiceValue::Importance(next));
            }
            Some(Field::InvestmentRange) => {
                let next =
                    cycle_forward(&InvestmentRange::ALL, self.state.form.investment_range());
                self.select(ChoiceValue::InvestmentRange(next));
            }
            Some(Field::Reasons) => self.state.reason_cursor_right(),
            _ => {}
        }
    }

    /// Re-validate the record and hand it to the sink when clean.
    ///
    /// Validation failure installs the error map and moves focus to the
    /// first invalid field. Sink failure raises the modal dialog and leaves
    /// the record untouched so a retry re-sends the same data.
    async fn submit_assessment(&mut self) {
        match self.state.form.finalize() {
            Ok(payload) => match self.sink.submit(payload).await {
                Ok(()) => {
                    tracing::info!(session = %self.session_id, "assessment submitted");
                    self.state.reset_form();
                    self.state.current_view = View::Submitted;
                    self.state.status_message =
                        Some("Assessment submitted successfully!".to_string());
                }
                Err(err) => {
                    tracing::warn!(session = %self.session_id, error = %err, "submission failed");
                    self.state.submit_error =
                        Some("Something went wrong. Please try again.".to_string());
                }
            },
            Err(errors) => {
                let count = errors.len();
                if let Some(field) = errors.first_field() {
                    tracing::debug!(
                        invalid = count,
                        first = field.name(),
                        "submission blocked by validation"
                    );
                    self.state.focus_field(field);
                }
                self.state.form = self.state.form.with_errors(errors);
                let noun = if count == 1 {
                    "field needs"
                } else {
                    "fields need"
                };
                self.state.status_message = Some(format!("{count} {noun} attention"));
            }
        }
    }
}

/// Next option after `current`, wrapping; the first option when unset
fn cycle_forward<T: Copy + PartialEq>(options: &[T], current: Option<T>) -> T {
    match current.and_then(|value| options.iter().position(|o| *o == value)) {
        Some(index) => options[(index + 1) % options.len()],
        None => options[0],
    }
}

/// Option before `current`, wrapping; the last option when unset
fn cycle_back<T: Copy + PartialEq>(options: &[T], current: Option<T>) -> T {
    match current.and_then(|value| options.iter().position(|o| *o == value)) {
        Some(0) | None => options[options.len() - 1],
        Some(index) => options[index - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormState, Reason, TextField, FORM_ROWS};
    use crate::submit::MockSubmissionSink;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_sink(sink: MockSubmissionSink) -> App {
        let mut app = App::with_sink(&TuiConfig::default(), Box::new(sink));
        app.state.current_view = View::Assessment;
        app
    }

    fn quiet_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().times(0);
        sink
    }

    fn filled_form() -> FormState {
        FormState::default()
            .with_text(TextField::FirstName, "Grace")
            .with_text(TextField::LastName, "Hopper")
            .with_text(TextField::Email, "grace@example.com")
            .with_text(TextField::PhoneNumber, "555-0100")
            .with_text(TextField::CurrentOccupation, "Rear Admiral")
            .with_choice(ChoiceValue::TimeCommitment(TimeCommitment::Five))
            .with_choice(ChoiceValue::Importance(ImportanceRating::Four))
            .with_reason(Reason::CareerChange, true)
            .with_choice(ChoiceValue::InvestmentRange(InvestmentRange::From3500))
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_enter_on_welcome_opens_the_form() {
            let mut app = App::with_sink(&TuiConfig::default(), Box::new(quiet_sink()));
            assert_eq!(app.state.current_view, View::Welcome);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Assessment);
        }

        #[tokio::test]
        async fn test_q_quits_from_welcome() {
            let mut app = App::with_sink(&TuiConfig::default(), Box::new(quiet_sink()));
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_ctrl_c_quits_from_the_form() {
            let mut app = app_with_sink(quiet_sink());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_esc_abandons_and_discards_the_record() {
            let mut app = app_with_sink(quiet_sink());
            app.state.form = app.state.form.with_text(TextField::FirstName, "Grace");
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Welcome);
            assert_eq!(app.state.form, FormState::default());
        }

        #[tokio::test]
        async fn test_skip_welcome_config_lands_on_the_form() {
            let config = TuiConfig {
                skip_welcome: Some(true),
                ..Default::default()
            };
            let app = App::with_sink(&config, Box::new(quiet_sink()));
            assert_eq!(app.state.current_view, View::Assessment);
        }
    }

    mod form_editing {
        use super::*;

        #[tokio::test]
        async fn test_typing_fills_the_focused_field() {
            let mut app = app_with_sink(quiet_sink());
            for c in ['J', 'o'] {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            assert_eq!(app.state.form.text(TextField::FirstName), "Jo");
        }

        #[tokio::test]
        async fn test_backspace_removes_the_last_char() {
            let mut app = app_with_sink(quiet_sink());
            app.state.form = app.state.form.with_text(TextField::FirstName, "Jo");
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.form.text(TextField::FirstName), "J");
        }

        #[tokio::test]
        async fn test_tab_moves_typing_to_the_next_field() {
            let mut app = app_with_sink(quiet_sink());
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('H'))).await.unwrap();
            assert_eq!(app.state.form.text(TextField::FirstName), "");
            assert_eq!(app.state.form.text(TextField::LastName), "H");
        }

        #[tokio::test]
        async fn test_enter_advances_focus_before_the_submit_row() {
            let mut app = app_with_sink(quiet_sink());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.active_row, 1);
        }

        #[tokio::test]
        async fn test_digit_selects_time_commitment() {
            let mut app = app_with_sink(quiet_sink());
            app.state.focus_field(Field::TimeCommitment);
            app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
            assert_eq!(app.state.form.time_commitment(), Some(TimeCommitment::Five));
        }

        #[tokio::test]
        async fn test_unmapped_digit_leaves_selection_unset() {
            let mut app = app_with_sink(quiet_sink());
            app.state.focus_field(Field::TimeCommitment);
            app.handle_key(key(KeyCode::Char('3'))).await.unwrap();
            assert_eq!(app.state.form.time_commitment(), None);
        }

        #[tokio::test]
        async fn test_arrows_cycle_radio_selection() {
            let mut app = app_with_sink(quiet_sink());
            app.state.focus_field(Field::Importance);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.form.importance(), Some(ImportanceRating::One));
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.form.importance(), Some(ImportanceRating::Five));
        }

        #[tokio::test]
        async fn test_space_toggles_the_reason_under_the_cursor() {
            let mut app = app_with_sink(quiet_sink());
            app.state.focus_field(Field::Reasons);
            app.handle_key(key(KeyCode::Right)).await.unwrap(); // -> career-change
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(app.state.form.reasons().contains(Reason::CareerChange));

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(!app.state.form.reasons().contains(Reason::CareerChange));
        }

        #[tokio::test]
        async fn test_space_on_none_replaces_other_reasons() {
            let mut app = app_with_sink(quiet_sink());
            app.state.form = app
                .state
                .form
                .with_reason(Reason::CareerChange, true)
                .with_reason(Reason::Entrepreneurship, true);
            app.state.focus_field(Field::Reasons);
            // Cursor starts on "none"
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(app.state.form.reasons().len(), 1);
            assert!(app.state.form.reasons().contains(Reason::None));
        }

        #[tokio::test]
        async fn test_typing_on_the_submit_row_is_ignored() {
            let mut app = app_with_sink(quiet_sink());
            app.state.active_row = FORM_ROWS - 1;
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form, FormState::default());
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_invalid_form_never_reaches_the_sink() {
            let mut app = app_with_sink(quiet_sink());
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Assessment);
            assert_eq!(app.state.form.errors().len(), Field::ALL.len());
            assert_eq!(app.state.active_row, 0); // first invalid field
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("9 fields need attention")
            );
        }

        #[tokio::test]
        async fn test_valid_form_is_delivered_once_and_discarded() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .withf(|payload| {
                    payload.first_name == "Grace" && payload.email == "grace@example.com"
                })
                .times(1)
                .returning(|_| Ok(()));

            let mut app = app_with_sink(sink);
            app.state.form = filled_form();
            app.state.active_row = FORM_ROWS - 1;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Submitted);
            assert_eq!(app.state.form, FormState::default());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Assessment submitted successfully!")
            );
        }

        #[tokio::test]
        async fn test_sink_failure_keeps_the_record_for_retry() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("downstream closed")));

            let mut app = app_with_sink(sink);
            app.state.form = filled_form();
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Assessment);
            assert_eq!(
                app.state.submit_error.as_deref(),
                Some("Something went wrong. Please try again.")
            );
            assert_eq!(app.state.form, filled_form());
        }

        #[tokio::test]
        async fn test_failure_dialog_blocks_input_until_dismissed() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("downstream closed")));

            let mut app = app_with_sink(sink);
            app.state.form = filled_form();
            app.handle_key(ctrl('s')).await.unwrap();

            // Typing is swallowed while the dialog is up
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert!(app.state.submit_error.is_some());
            assert_eq!(app.state.form, filled_form());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.submit_error.is_none());
        }

        #[tokio::test]
        async fn test_retry_after_failure_resends_the_same_payload() {
            let mut seq = mockall::Sequence::new();
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(anyhow::anyhow!("downstream closed")));
            sink.expect_submit()
                .withf(|payload| payload.first_name == "Grace")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));

            let mut app = app_with_sink(sink);
            app.state.form = filled_form();
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap(); // dismiss dialog
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Submitted);
        }

        #[tokio::test]
        async fn test_editing_after_failed_validation_clears_that_error() {
            let mut app = app_with_sink(quiet_sink());
            app.handle_key(ctrl('s')).await.unwrap();
            assert!(app.state.form.errors().contains(Field::FirstName));

            app.handle_key(key(KeyCode::Char('G'))).await.unwrap();
            assert!(!app.state.form.errors().contains(Field::FirstName));
            assert!(app.state.form.errors().contains(Field::LastName));
        }

        #[tokio::test]
        async fn test_single_invalid_field_message_is_singular() {
            let mut app = app_with_sink(quiet_sink());
            app.state.form = filled_form().with_text(TextField::Email, "nope");
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("1 field needs attention")
            );
            assert_eq!(app.state.focused_field(), Some(Field::Email));
        }
    }

    mod cycling {
        use super::*;

        #[test]
        fn test_cycle_forward_starts_at_the_first_option() {
            assert_eq!(
                cycle_forward(&TimeCommitment::ALL, None),
                TimeCommitment::Zero
            );
        }

        #[test]
        fn test_cycle_forward_wraps() {
            assert_eq!(
                cycle_forward(&TimeCommitment::ALL, Some(TimeCommitment::Five)),
                TimeCommitment::Zero
            );
        }

        #[test]
        fn test_cycle_back_starts_at_the_last_option() {
            assert_eq!(
                cycle_back(&InvestmentRange::ALL, None),
                InvestmentRange::From3500
            );
        }

        #[test]
        fn test_cycle_back_wraps() {
            assert_eq!(
                cycle_back(&ImportanceRating::ALL, Some(ImportanceRating::One)),
                ImportanceRating::Five
            );
        }
    }
}
