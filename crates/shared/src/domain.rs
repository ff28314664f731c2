use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest name or location the backend column accepts.
pub const MAX_FIELD_CHARS: usize = 100;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CompanyId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
    Location,
}

impl CompanyField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{} must not be empty", .0.label())]
    Empty(CompanyField),
    #[error("{} exceeds {} characters", .0.label(), MAX_FIELD_CHARS)]
    TooLong(CompanyField),
}

/// Body of a create or update request. Never carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub location: String,
}

impl CompanyDraft {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        check_field(CompanyField::Name, &self.name)?;
        check_field(CompanyField::Location, &self.location)
    }
}

fn check_field(field: CompanyField, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::Empty(field));
    }
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(DraftError::TooLong(field));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub location: String,
}

impl Company {
    pub fn matches(&self, draft: &CompanyDraft) -> bool {
        self.name == draft.name && self.location == draft.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_id_serializes_as_bare_number() {
        let company = Company {
            id: CompanyId(1),
            name: "Acme".into(),
            location: "NYC".into(),
        };
        let json = serde_json::to_value(&company).expect("json");
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Acme", "location": "NYC" })
        );
    }

    #[test]
    fn draft_serializes_without_id() {
        let json = serde_json::to_value(CompanyDraft::new("Acme", "NYC")).expect("json");
        assert_eq!(json, serde_json::json!({ "name": "Acme", "location": "NYC" }));
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            CompanyDraft::new("   ", "NYC").validate(),
            Err(DraftError::Empty(CompanyField::Name))
        );
        assert_eq!(
            CompanyDraft::new("Acme", "").validate(),
            Err(DraftError::Empty(CompanyField::Location))
        );
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let long = "x".repeat(MAX_FIELD_CHARS + 1);
        assert_eq!(
            CompanyDraft::new("Acme", long).validate(),
            Err(DraftError::TooLong(CompanyField::Location))
        );
        let exact = "é".repeat(MAX_FIELD_CHARS);
        assert!(CompanyDraft::new(exact, "NYC").validate().is_ok());
    }
}
