//! Application state and key handling

use crate::config::FormConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{ContactForm, Form};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// The contact form and its last submission
    pub form: ContactForm,
    /// Whether the app should quit
    quit: bool,
    /// Feedback for the last successful action
    pub status_message: Option<String>,
    /// Feedback for the last failed action
    pub error_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: ContactForm::new(config.schema()),
            quit: false,
            status_message: None,
            error_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press on the form
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status_message = None;
        self.error_message = None;

        let has_command_modifier = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => self.copy_submission(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => {
                if self.form.is_submit_active() {
                    self.submit();
                } else if self.form.is_active_field_multiline() {
                    self.form.insert_newline();
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Char(c) if !has_command_modifier => self.form.input_char(c),
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.form.submit() {
            Ok(data) => {
                let at = data.submitted_at.with_timezone(&Local).format("%H:%M:%S");
                self.status_message = Some(format!("Submitted at {at}"));
            }
            Err(errors) => {
                self.error_message = Some(format!("{} field(s) need attention", errors.len()));
            }
        }
    }

    fn copy_submission(&mut self) {
        let Some(data) = self.form.submitted() else {
            self.error_message = Some("Nothing submitted yet".to_string());
            return;
        };

        let result = data
            .to_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| copy_to_clipboard(&json));
        match result {
            Ok(()) => {
                tracing::info!("copied submission to clipboard");
                self.status_message = Some("Copied submission".to_string());
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e:#}");
                self.error_message = Some(format!("Copy failed: {e}"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, SUBMIT_ROW};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn new_app() -> App {
        App::new(&FormConfig::default())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!new_app().should_quit());
        }

        #[test]
        fn test_escape_quits() {
            let mut app = new_app();
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_tab_and_backtab_move_focus() {
            let mut app = new_app();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.form.active_field_name(), Some(FieldName::LastName));
            app.handle_key(key(KeyCode::BackTab));
            app.handle_key(key(KeyCode::Up));
            assert!(app.form.is_submit_active());
            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.form.active_field_name(), Some(FieldName::FirstName));
        }

        #[test]
        fn test_enter_advances_single_line_fields() {
            let mut app = new_app();
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.form.active_field_name(), Some(FieldName::LastName));
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = new_app();
            app.form.set_active_field(3);
            type_str(&mut app, "a");
            app.handle_key(key(KeyCode::Enter));
            type_str(&mut app, "b");
            assert_eq!(app.form.message.as_text(), "a\nb");
            assert_eq!(app.form.active_field_name(), Some(FieldName::Message));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_updates_field_and_errors() {
            let mut app = new_app();
            type_str(&mut app, "123");
            assert_eq!(app.form.first_name.as_text(), "123");
            assert_eq!(app.form.errors().len(), 1);
        }

        #[test]
        fn test_shifted_chars_are_typed() {
            let mut app = new_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
            assert_eq!(app.form.first_name.as_text(), "M");
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = new_app();
            app.handle_key(ctrl('x'));
            assert_eq!(app.form.first_name.as_text(), "");
        }

        #[test]
        fn test_backspace_removes_char() {
            let mut app = new_app();
            type_str(&mut app, "ab");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.form.first_name.as_text(), "a");
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        fn fill_valid(app: &mut App) {
            app.form.set_value(FieldName::FirstName, "12345");
            app.form.set_value(FieldName::LastName, "678");
            app.form.set_value(FieldName::Email, "123@gmail.com");
        }

        #[test]
        fn test_enter_on_button_submits() {
            let mut app = new_app();
            fill_valid(&mut app);
            app.form.set_active_field(SUBMIT_ROW);
            app.handle_key(key(KeyCode::Enter));
            assert!(app.form.submitted().is_some());
            assert!(app
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Submitted at ")));
        }

        #[test]
        fn test_ctrl_s_submits_from_any_field() {
            let mut app = new_app();
            fill_valid(&mut app);
            app.handle_key(ctrl('s'));
            assert!(app.form.submitted().is_some());
            assert_eq!(app.form.first_name.as_text(), "12345");
        }

        #[test]
        fn test_failed_submit_reports_count() {
            let mut app = new_app();
            app.handle_key(ctrl('s'));
            assert!(app.form.submitted().is_none());
            assert_eq!(
                app.error_message.as_deref(),
                Some("3 field(s) need attention")
            );
        }

        #[test]
        fn test_status_cleared_on_next_key() {
            let mut app = new_app();
            app.handle_key(ctrl('s'));
            app.handle_key(key(KeyCode::Tab));
            assert!(app.error_message.is_none());
        }

        #[test]
        fn test_copy_without_submission_reports_error() {
            let mut app = new_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('y'), COPY_MODIFIER));
            assert_eq!(app.error_message.as_deref(), Some("Nothing submitted yet"));
        }
    }
}
