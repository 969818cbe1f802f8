//! Form controller: edit buffer, submit cycle and shared state sync

use super::field::cycle_role;
use super::form_state::{FieldInput, Form, SignupForm};
use crate::record::{FieldName, FormRecord};
use crate::store::{FormSubscription, Writer};
use crate::sync::Synchronizer;
use crate::validation::{validate, FieldErrors};

/// Where the current submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    /// Last submit succeeded; edits are still accepted and move back to `Editing`
    Accepted,
}

/// Result of one submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(FormRecord),
    Rejected(FieldErrors),
}

pub struct FormController {
    form: SignupForm,
    phase: FormPhase,
    errors: FieldErrors,
    accepted: Option<FormRecord>,
    sync: Synchronizer,
    subscription: FormSubscription,
}

impl FormController {
    /// Hydrate shared state and seed the edit buffer from it
    pub async fn new(sync: Synchronizer) -> Self {
        let record = sync.hydrate().await;
        let subscription = sync.store().subscribe();
        Self {
            form: SignupForm::from_record(&record),
            phase: FormPhase::default(),
            errors: FieldErrors::default(),
            accepted: None,
            sync,
            subscription,
        }
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Last accepted record, kept for display alongside the buffer
    pub fn accepted(&self) -> Option<&FormRecord> {
        self.accepted.as_ref()
    }

    #[allow(dead_code)]
    pub fn synchronizer(&self) -> &Synchronizer {
        &self.sync
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    #[allow(dead_code)]
    pub fn focus(&mut self, index: usize) {
        self.form.set_active_field(index);
    }

    /// Apply one field edit from the input surface
    pub fn edit(&mut self, input: FieldInput) {
        let field = input.field();
        tracing::debug!("Edit on {field}");
        self.form.apply(input);
        self.errors.clear(field);
        self.phase = FormPhase::Editing;
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let mut value = self.form.field(field).as_text().to_string();
        value.push(c);
        if let Some(input) = FieldInput::text(field, value) {
            self.edit(input);
        }
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let mut value = self.form.field(field).as_text().to_string();
        if value.pop().is_none() {
            return;
        }
        if let Some(input) = FieldInput::text(field, value) {
            self.edit(input);
        }
    }

    pub fn cycle_role(&mut self, forward: bool) {
        let next = cycle_role(self.form.role.as_selection(), forward);
        self.edit(FieldInput::Role(next));
    }

    pub fn toggle_terms(&mut self) {
        let checked = !self.form.agree_to_terms.is_checked();
        self.edit(FieldInput::AgreeToTerms(checked));
    }

    /// Validate the whole buffer and commit it on success.
    ///
    /// The buffer itself is never modified by a submit.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.phase = FormPhase::Submitting;
        let draft = self.form.draft();

        match validate(&draft) {
            Ok(record) => {
                self.sync.commit(record.clone()).await;
                self.errors = FieldErrors::default();
                self.accepted = Some(record.clone());
                self.phase = FormPhase::Accepted;
                SubmitOutcome::Accepted(record)
            }
            Err(errors) => {
                tracing::debug!("Submit rejected with {} field error(s)", errors.len());
                self.errors = errors.clone();
                self.phase = FormPhase::Editing;
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Pick up shared state writes made by anyone but this form.
    ///
    /// Returns true when the buffer was reset.
    pub fn poll_shared_state(&mut self) -> bool {
        match self.subscription.poll() {
            Some(snapshot) if snapshot.writer != Writer::Form => {
                tracing::debug!(
                    revision = snapshot.revision,
                    writer = ?snapshot.writer,
                    "Shared form data changed"
                );
                self.on_external_change(&snapshot.record);
                true
            }
            _ => false,
        }
    }

    /// Mirror an externally written record into the buffer in full,
    /// discarding unsaved edits
    pub fn on_external_change(&mut self, record: &FormRecord) {
        self.form.reset_from(record);
        self.errors = FieldErrors::default();
        self.phase = FormPhase::Editing;
    }

    /// Revert the buffer to what storage holds
    pub async fn reload(&mut self) {
        self.sync.reload().await;
        self.poll_shared_state();
    }

    /// Forget stored data and reset the buffer to defaults
    pub async fn clear_saved(&mut self) {
        self.sync.clear().await;
        self.poll_shared_state();
    }

    fn focused_text_field(&self) -> Option<FieldName> {
        self.form
            .active_field_name()
            .filter(|name| self.form.field(*name).is_textual())
    }
}
