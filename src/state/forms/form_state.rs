//! Live edit buffer for the sign-up form

use super::field::{FieldValue, FormField};
use crate::record::{FieldName, FormDraft, FormRecord};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// One reported edit: the field and its complete new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Username(String),
    Email(String),
    Password(String),
    Role(Option<String>),
    AgreeToTerms(bool),
}

impl FieldInput {
    pub fn field(&self) -> FieldName {
        match self {
            Self::Username(_) => FieldName::Username,
            Self::Email(_) => FieldName::Email,
            Self::Password(_) => FieldName::Password,
            Self::Role(_) => FieldName::Role,
            Self::AgreeToTerms(_) => FieldName::AgreeToTerms,
        }
    }

    /// Build an input for a text field, `None` for non-text fields
    pub fn text(field: FieldName, value: String) -> Option<Self> {
        match field {
            FieldName::Username => Some(Self::Username(value)),
            FieldName::Email => Some(Self::Email(value)),
            FieldName::Password => Some(Self::Password(value)),
            FieldName::Role | FieldName::AgreeToTerms => None,
        }
    }
}

/// Index of the submit button row, after the five fields
pub const SUBMIT_ROW: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub username: FormField,
    pub email: FormField,
    pub password: FormField,
    pub role: FormField,
    pub agree_to_terms: FormField,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            username: FormField::text(FieldName::Username, draft.username.clone()),
            email: FormField::text(FieldName::Email, draft.email.clone()),
            password: FormField::secret(FieldName::Password, draft.password.clone()),
            role: FormField::select(FieldName::Role, draft.role.clone()),
            agree_to_terms: FormField::checkbox(FieldName::AgreeToTerms, draft.agree_to_terms),
            active_field_index: 0,
        }
    }

    pub fn from_record(record: &FormRecord) -> Self {
        Self::from_draft(&FormDraft::from(record))
    }

    /// Replace every field with the record's values, keeping focus
    pub fn reset_from(&mut self, record: &FormRecord) {
        let active = self.active_field_index;
        *self = Self::from_record(record);
        self.active_field_index = active;
    }

    /// Snapshot the buffer as raw input for validation
    pub fn draft(&self) -> FormDraft {
        FormDraft {
            username: self.username.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            role: self.role.as_selection().map(str::to_string),
            agree_to_terms: self.agree_to_terms.is_checked(),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Role => &self.role,
            FieldName::AgreeToTerms => &self.agree_to_terms,
        }
    }

    /// Focused field, `None` while the submit row is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Overwrite one field with its new value
    pub fn apply(&mut self, input: FieldInput) {
        match input {
            FieldInput::Username(value) => self.username.value = FieldValue::Text(value),
            FieldInput::Email(value) => self.email.value = FieldValue::Text(value),
            FieldInput::Password(value) => self.password.value = FieldValue::Secret(value),
            FieldInput::Role(value) => self.role.value = FieldValue::Select(value),
            FieldInput::AgreeToTerms(value) => {
                self.agree_to_terms.value = FieldValue::Checkbox(value)
            }
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::from_record(&FormRecord::default())
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        6 // five fields, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Role;

    fn bob() -> FormRecord {
        FormRecord {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "hunter22".to_string(),
            role: Role::Superadmin,
            agree_to_terms: true,
        }
    }

    mod signup_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_mirrors_default_record() {
            let form = SignupForm::default();
            assert_eq!(form.draft(), FormDraft::from(&FormRecord::default()));
            assert_eq!(form.role.as_selection(), Some("user"));
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_from_record_loads_values() {
            let form = SignupForm::from_record(&bob());
            assert_eq!(form.username.as_text(), "bob");
            assert_eq!(form.password.as_text(), "hunter22");
            assert_eq!(form.role.display_value(), "Super Admin");
            assert!(form.agree_to_terms.is_checked());
        }

        #[test]
        fn test_apply_replaces_single_field() {
            let mut form = SignupForm::from_record(&bob());
            form.apply(FieldInput::Email("new@example.com".to_string()));
            let draft = form.draft();
            assert_eq!(draft.email, "new@example.com");
            assert_eq!(draft.username, "bob");
        }

        #[test]
        fn test_apply_role_can_clear_selection() {
            let mut form = SignupForm::default();
            form.apply(FieldInput::Role(None));
            assert_eq!(form.draft().role, None);
        }

        #[test]
        fn test_reset_from_replaces_all_fields_and_keeps_focus() {
            let mut form = SignupForm::default();
            form.apply(FieldInput::Username("draft".to_string()));
            form.apply(FieldInput::Role(Some("root".to_string())));
            form.set_active_field(2);

            form.reset_from(&bob());
            assert_eq!(form.draft(), FormDraft::from(&bob()));
            assert_eq!(form.active_field_index, 2);
        }

        #[test]
        fn test_field_input_names() {
            assert_eq!(FieldInput::AgreeToTerms(true).field(), FieldName::AgreeToTerms);
            assert_eq!(
                FieldInput::text(FieldName::Email, "x".to_string()),
                Some(FieldInput::Email("x".to_string()))
            );
            assert_eq!(FieldInput::text(FieldName::Role, "x".to_string()), None);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count() {
            assert_eq!(SignupForm::default().field_count(), 6);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SignupForm::default();
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = SignupForm::default();
            form.prev_field();
            assert!(form.is_submit_row_active());
            assert_eq!(form.active_field_name(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = SignupForm::default();
            assert_eq!(form.get_field(0).unwrap().name, FieldName::Username);
            assert_eq!(form.get_field(1).unwrap().name, FieldName::Email);
            assert_eq!(form.get_field(2).unwrap().name, FieldName::Password);
            assert_eq!(form.get_field(3).unwrap().name, FieldName::Role);
            assert_eq!(form.get_field(4).unwrap().name, FieldName::AgreeToTerms);
            assert!(form.get_field(5).is_none());
        }
    }
}
