//! Sign-up form data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role offered by the role select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// All roles in select order
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::Superadmin];

    /// Wire value stored in the payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// Human label for the select and summary
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
            Self::Superadmin => "Super Admin",
        }
    }

    /// Parse an exact wire value. No case folding or trimming.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five-field record held by shared state and written to storage
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub agree_to_terms: bool,
}

/// Field identifiers in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Username,
    Email,
    Password,
    Role,
    AgreeToTerms,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::Role,
        FieldName::AgreeToTerms,
    ];

    /// Key used in the serialized record
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::Role => "role",
            Self::AgreeToTerms => "agreeToTerms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Role => "Role",
            Self::AgreeToTerms => "I agree to terms and conditions",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "Enter your username",
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
            Self::Role => "Select a role",
            Self::AgreeToTerms => "",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Raw, unvalidated form input as reported by the input surface.
///
/// Text and checkbox values arrive already typed. The role is kept as the raw
/// selected string because nothing upstream guarantees it is a known role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub agree_to_terms: bool,
}

impl From<&FormRecord> for FormDraft {
    fn from(record: &FormRecord) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            role: Some(record.role.as_str().to_string()),
            agree_to_terms: record.agree_to_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_record() {
        let record = FormRecord::default();
        assert_eq!(record.username, "");
        assert_eq!(record.email, "");
        assert_eq!(record.password, "");
        assert_eq!(record.role, Role::User);
        assert!(!record.agree_to_terms);
    }

    #[test]
    fn test_serialized_field_names() {
        let record = FormRecord {
            username: "alice".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Superadmin,
            agree_to_terms: true,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "alice",
                "email": "a@b.com",
                "password": "secret1",
                "role": "superadmin",
                "agreeToTerms": true
            })
        );
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"username": "alice", "email": "a@b.com"}"#;
        assert!(serde_json::from_str::<FormRecord>(json).is_err());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"username":"a","email":"b","password":"c","role":"root","agreeToTerms":true}"#;
        assert!(serde_json::from_str::<FormRecord>(json).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{"username":"a","email":"b","password":"c","role":"admin","agreeToTerms":false,"theme":"dark"}"#;
        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role, Role::Admin);
    }

    #[test]
    fn test_role_parse_is_exact() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(" user"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Superadmin.label(), "Super Admin");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_draft_from_record() {
        let record = FormRecord {
            role: Role::Admin,
            ..Default::default()
        };
        let draft = FormDraft::from(&record);
        assert_eq!(draft.role.as_deref(), Some("admin"));
        assert_eq!(draft.username, "");
    }

    #[test]
    fn test_field_names_in_form_order() {
        let names: Vec<_> = FieldName::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(
            names,
            vec!["username", "email", "password", "role", "agreeToTerms"]
        );
    }
}
