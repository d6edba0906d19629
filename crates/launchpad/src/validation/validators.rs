// File: src/validation/validators.rs
// Purpose: Field-level validators and JSON field readers

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::{ValidationErrors, ViolationKind};

// Local part may not end in a dot; leading dots and ".." are rejected separately
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_REGEX.is_match(email)
}

/// Length in characters (Unicode scalar values), not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Message reported when a string is longer than `max`
pub fn max_length_message(max: usize) -> String {
    format!("String must contain at most {} character(s)", max)
}

/// Name of a JSON value's type as reported in type mismatch messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_type(errors: &mut ValidationErrors, field: &str, expected: &str, value: &Value) {
    errors.push(
        field,
        ViolationKind::InvalidType,
        format!("Expected {}, received {}", expected, json_type_name(value)),
    );
}

/// Read a required string field. Absent and null are both reported as missing.
pub fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, ViolationKind::MissingRequired, "Required");
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            invalid_type(errors, field, "string", other);
            None
        }
    }
}

/// Read an optional string field. The outer `None` means a violation was recorded.
pub fn optional_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<Option<&'a str>> {
    match object.get(field) {
        None => Some(None),
        Some(Value::String(s)) => Some(Some(s)),
        Some(other) => {
            invalid_type(errors, field, "string", other);
            None
        }
    }
}

/// Read a boolean field, falling back to `default` when absent
pub fn bool_or(
    object: &Map<String, Value>,
    field: &str,
    default: bool,
    errors: &mut ValidationErrors,
) -> Option<bool> {
    match object.get(field) {
        None => Some(default),
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            invalid_type(errors, field, "boolean", other);
            None
        }
    }
}

/// Check a non-empty string with an inclusive maximum length
pub fn check_length(
    value: &str,
    field: &str,
    max: usize,
    empty_message: &str,
    errors: &mut ValidationErrors,
) -> bool {
    let len = char_len(value);
    if len == 0 {
        errors.push(field, ViolationKind::MissingRequired, empty_message);
        return false;
    }
    if len > max {
        errors.push(field, ViolationKind::MaxLengthExceeded, max_length_message(max));
        return false;
    }
    true
}
