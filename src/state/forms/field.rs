//! Form field value objects

use crate::record::{FieldName, Role};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text rendered masked
    Secret(String),
    /// Raw selected option, `None` when nothing is selected
    Select(Option<String>),
    Checkbox(bool),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
}

impl FormField {
    pub fn text(name: FieldName, value: String) -> Self {
        Self {
            name,
            value: FieldValue::Text(value),
        }
    }

    pub fn secret(name: FieldName, value: String) -> Self {
        Self {
            name,
            value: FieldValue::Secret(value),
        }
    }

    pub fn select(name: FieldName, value: Option<String>) -> Self {
        Self {
            name,
            value: FieldValue::Select(value),
        }
    }

    pub fn checkbox(name: FieldName, checked: bool) -> Self {
        Self {
            name,
            value: FieldValue::Checkbox(checked),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Whether the field accepts typed characters
    pub fn is_textual(&self) -> bool {
        matches!(self.value, FieldValue::Text(_) | FieldValue::Secret(_))
    }

    /// Get the text value (empty for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Select(_) | FieldValue::Checkbox(_) => "",
        }
    }

    pub fn as_selection(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Select(selected) => selected.as_deref(),
            _ => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => "•".repeat(s.chars().count()),
            FieldValue::Select(None) => String::new(),
            FieldValue::Select(Some(raw)) => match Role::parse(raw) {
                Some(role) => role.label().to_string(),
                None => raw.clone(),
            },
            FieldValue::Checkbox(checked) => {
                if *checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        }
    }
}

/// Next role in select order, wrapping through the empty selection
pub fn cycle_role(current: Option<&str>, forward: bool) -> Option<String> {
    // None sits before the first option
    let mut options: Vec<Option<&str>> = vec![None];
    options.extend(Role::ALL.iter().map(|role| Some(role.as_str())));

    let index = options
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % options.len()
    } else {
        (index + options.len() - 1) % options.len()
    };
    options[next].map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_masked() {
        let field = FormField::secret(FieldName::Password, "abc".to_string());
        assert_eq!(field.display_value(), "•••");
        assert_eq!(field.as_text(), "abc");
    }

    #[test]
    fn test_select_shows_role_label() {
        let field = FormField::select(FieldName::Role, Some("superadmin".to_string()));
        assert_eq!(field.display_value(), "Super Admin");
        assert_eq!(field.as_selection(), Some("superadmin"));
    }

    #[test]
    fn test_select_shows_unknown_value_verbatim() {
        let field = FormField::select(FieldName::Role, Some("root".to_string()));
        assert_eq!(field.display_value(), "root");
    }

    #[test]
    fn test_empty_select_displays_nothing() {
        let field = FormField::select(FieldName::Role, None);
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_checkbox_display() {
        let mut field = FormField::checkbox(FieldName::AgreeToTerms, false);
        assert_eq!(field.display_value(), "[ ]");
        field.value = FieldValue::Checkbox(true);
        assert_eq!(field.display_value(), "[x]");
        assert!(field.is_checked());
    }

    #[test]
    fn test_is_textual() {
        assert!(FormField::text(FieldName::Username, String::new()).is_textual());
        assert!(FormField::secret(FieldName::Password, String::new()).is_textual());
        assert!(!FormField::select(FieldName::Role, None).is_textual());
        assert!(!FormField::checkbox(FieldName::AgreeToTerms, false).is_textual());
    }

    #[test]
    fn test_cycle_role_forward_wraps_through_none() {
        assert_eq!(cycle_role(None, true).as_deref(), Some("user"));
        assert_eq!(cycle_role(Some("user"), true).as_deref(), Some("admin"));
        assert_eq!(cycle_role(Some("admin"), true).as_deref(), Some("superadmin"));
        assert_eq!(cycle_role(Some("superadmin"), true), None);
    }

    #[test]
    fn test_cycle_role_backward() {
        assert_eq!(cycle_role(None, false).as_deref(), Some("superadmin"));
        assert_eq!(cycle_role(Some("user"), false), None);
    }

    #[test]
    fn test_cycle_role_from_unknown_value_starts_over() {
        assert_eq!(cycle_role(Some("root"), true).as_deref(), Some("user"));
    }
}
