//! Application state and key routing

use crate::platform::ACTION_MODIFIER;
use crate::record::FieldName;
use crate::state::{FormController, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Form controller owning the edit buffer
    pub controller: FormController,
    /// Whether accepted submissions are written to disk
    pub persist: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(controller: FormController, persist: bool) -> Self {
        Self {
            controller,
            persist,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply shared state changes made outside the form
    pub fn tick(&mut self) {
        if self.controller.poll_shared_state() {
            self.status_message = Some("Form reset to shared data".to_string());
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let active = self.controller.form().active_field_name();
        let on_submit_row = self.controller.form().is_submit_row_active();
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.controller.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.controller.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if control => self.submit().await,
            KeyCode::Char('r') if key.modifiers.contains(ACTION_MODIFIER) => {
                self.controller.reload().await;
                self.status_message = Some("Reverted to saved data".to_string());
            }
            KeyCode::Char('k') if key.modifiers.contains(ACTION_MODIFIER) => {
                self.controller.clear_saved().await;
                self.status_message = Some("Saved data cleared".to_string());
            }
            KeyCode::Enter if on_submit_row => self.submit().await,
            KeyCode::Enter if active == Some(FieldName::AgreeToTerms) => {
                self.controller.toggle_terms()
            }
            KeyCode::Enter => self.controller.next_field(),
            // Role select
            KeyCode::Left if active == Some(FieldName::Role) => self.controller.cycle_role(false),
            KeyCode::Right | KeyCode::Char(' ') if active == Some(FieldName::Role) => {
                self.controller.cycle_role(true)
            }
            KeyCode::Char(' ') if active == Some(FieldName::AgreeToTerms) => {
                self.controller.toggle_terms()
            }
            // Text input
            KeyCode::Char(c) if !control => self.controller.input_char(c),
            KeyCode::Backspace => self.controller.backspace(),
            _ => {}
        }
        Ok(())
    }

    async fn submit(&mut self) {
        let message = match self.controller.submit().await {
            SubmitOutcome::Accepted(record) if self.persist => {
                format!("Saved submission for {}", record.username)
            }
            SubmitOutcome::Accepted(record) => {
                format!("Accepted submission for {}", record.username)
            }
            SubmitOutcome::Rejected(errors) => {
                let fields: Vec<String> =
                    errors.iter().map(|(field, _)| field.to_string()).collect();
                format!("Check {}", fields.join(", "))
            }
        };
        self.status_message = Some(message);
    }
}
