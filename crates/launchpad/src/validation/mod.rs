// File: src/validation/mod.rs
// Purpose: Validation runtime: violation types and the schema trait

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

pub mod schemas;
pub mod upload;
pub mod validators;

pub use schemas::{PostInput, UserInput};
pub use upload::validate_image_upload;

/// Field name used for violations that are not tied to a single field
pub const GENERAL_FIELD: &str = "_general";

/// Which constraint a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingRequired,
    MaxLengthExceeded,
    FormatInvalid,
    InvalidType,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::MissingRequired => "missing_required",
            ViolationKind::MaxLengthExceeded => "max_length_exceeded",
            ViolationKind::FormatInvalid => "format_invalid",
            ViolationKind::InvalidType => "invalid_type",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field: (field name, violated constraint, message)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Every violation found while validating one input record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, kind: ViolationKind, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, kind, message));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    /// Names of the rejected fields, in the order they were first reported
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for violation in &self.violations {
            if !fields.contains(&violation.field.as_str()) {
                fields.push(&violation.field);
            }
        }
        fields
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Kind of the first violation reported for a field
    pub fn kind_of(&self, field: &str) -> Option<ViolationKind> {
        self.violations.iter().find(|v| v.field == field).map(|v| v.kind)
    }

    /// Field name to messages, the shape forms use to render errors
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for violation in &self.violations {
            map.entry(violation.field.clone())
                .or_default()
                .push(violation.message.clone());
        }
        map
    }

    /// Ok when nothing was reported
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed")?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", sep, violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// A record type that can be parsed out of untrusted JSON
///
/// Parsing is synchronous and total: it either yields the normalized record
/// or reports every violated field at once.
pub trait Schema: Sized + Serialize {
    /// Record name used in logs
    const NAME: &'static str;

    fn parse(input: &Value) -> Result<Self, ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_fields_are_deduplicated_in_order() {
        let mut errors = ValidationErrors::new();
        errors.push("name", ViolationKind::MissingRequired, "Required");
        errors.push("email", ViolationKind::FormatInvalid, "Invalid email address");
        errors.push("name", ViolationKind::MaxLengthExceeded, "too long");

        assert_eq!(errors.fields(), vec!["name", "email"]);
        assert_eq!(errors.kind_of("name"), Some(ViolationKind::MissingRequired));
        assert_eq!(errors.to_map().get("name").map(Vec::len), Some(2));
        assert!(!errors.has_field("title"));
    }

    #[test]
    fn test_display_lists_each_violation() {
        let mut errors = ValidationErrors::new();
        errors.push("name", ViolationKind::MissingRequired, "Name is required");
        errors.push("email", ViolationKind::FormatInvalid, "Invalid email address");

        assert_eq!(
            errors.to_string(),
            "validation failed: name: Name is required; email: Invalid email address"
        );
    }

    #[test]
    fn test_serializes_as_violation_list() {
        let mut errors = ValidationErrors::new();
        errors.push("title", ViolationKind::MaxLengthExceeded, "too long");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "field": "title", "kind": "max_length_exceeded", "message": "too long" }
            ])
        );
    }
}
