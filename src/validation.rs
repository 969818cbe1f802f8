//! Schema validation for the sign-up form
//!
//! Every field has one rule. Rules run in form order and never short-circuit,
//! so a single submit reports every failing field at once.

use crate::record::{FieldName, FormDraft, FormRecord, Role};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 8;
pub const PASSWORD_MIN: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// A single field's constraint violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("String must contain at least {min} character(s)")]
    TooShort { min: usize },
    #[error("String must contain at most {max} character(s)")]
    TooLong { max: usize },
    #[error("Invalid email")]
    Format,
    #[error("Required")]
    MissingSelection,
    #[error("Invalid enum value. Expected 'user' | 'admin' | 'superadmin', received '{received}'")]
    InvalidEnum { received: String },
    #[error("You must agree to terms.")]
    UnmetCondition,
}

/// Coarse error category, independent of the message details
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Length,
    Format,
    MissingSelection,
    InvalidEnum,
    UnmetCondition,
}

impl FieldError {
    #[allow(dead_code)]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooShort { .. } | Self::TooLong { .. } => ErrorKind::Length,
            Self::Format => ErrorKind::Format,
            Self::MissingSelection => ErrorKind::MissingSelection,
            Self::InvalidEnum { .. } => ErrorKind::InvalidEnum,
            Self::UnmetCondition => ErrorKind::UnmetCondition,
        }
    }
}

/// Field-scoped errors from one validation pass, ordered by field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    #[allow(dead_code)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    #[allow(dead_code)]
    pub fn kind_of(&self, field: FieldName) -> Option<ErrorKind> {
        self.get(field).map(FieldError::kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Drop the error for one field (used when the user edits it)
    pub fn clear(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }
}

type Rule = fn(&FormDraft) -> Option<FieldError>;

const RULES: [(FieldName, Rule); 5] = [
    (FieldName::Username, check_username),
    (FieldName::Email, check_email),
    (FieldName::Password, check_password),
    (FieldName::Role, check_role),
    (FieldName::AgreeToTerms, check_terms),
];

/// Validate a draft into an accepted record.
///
/// Values are taken verbatim; strings are not trimmed or normalized.
pub fn validate(draft: &FormDraft) -> Result<FormRecord, FieldErrors> {
    let mut errors = FieldErrors::default();
    for (field, rule) in RULES {
        if let Some(error) = rule(draft) {
            errors.insert(field, error);
        }
    }

    match draft.role.as_deref().and_then(Role::parse) {
        Some(role) if errors.is_empty() => Ok(FormRecord {
            username: draft.username.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
            role,
            agree_to_terms: draft.agree_to_terms,
        }),
        _ => Err(errors),
    }
}

fn check_length(value: &str, min: usize, max: Option<usize>) -> Option<FieldError> {
    let len = value.chars().count();
    if len < min {
        return Some(FieldError::TooShort { min });
    }
    match max {
        Some(max) if len > max => Some(FieldError::TooLong { max }),
        _ => None,
    }
}

fn check_username(draft: &FormDraft) -> Option<FieldError> {
    check_length(&draft.username, USERNAME_MIN, Some(USERNAME_MAX))
}

fn check_email(draft: &FormDraft) -> Option<FieldError> {
    if is_valid_email(&draft.email) {
        None
    } else {
        Some(FieldError::Format)
    }
}

fn check_password(draft: &FormDraft) -> Option<FieldError> {
    check_length(&draft.password, PASSWORD_MIN, None)
}

fn check_role(draft: &FormDraft) -> Option<FieldError> {
    match draft.role.as_deref() {
        None => Some(FieldError::MissingSelection),
        Some(value) if Role::parse(value).is_none() => Some(FieldError::InvalidEnum {
            received: value.to_string(),
        }),
        Some(_) => None,
    }
}

fn check_terms(draft: &FormDraft) -> Option<FieldError> {
    if draft.agree_to_terms {
        None
    } else {
        Some(FieldError::UnmetCondition)
    }
}

/// Email grammar check.
///
/// The regex covers the character classes; the dot rules are checked
/// separately because the regex engine has no lookaround.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}
