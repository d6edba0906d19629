// File: src/validation/schemas.rs
// Purpose: User and post input schemas

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validators::{bool_or, check_length, is_valid_email, optional_string, required_string};
use super::{Schema, ValidationErrors, ViolationKind, GENERAL_FIELD};

pub const USER_NAME_MAX: usize = 100;
pub const POST_TITLE_MAX: usize = 200;

/// Validated user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

/// Validated post input. `published` is false unless the input says otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub published: bool,
}

fn expect_object<'a>(
    input: &'a Value,
    errors: &mut ValidationErrors,
) -> Option<&'a serde_json::Map<String, Value>> {
    match input {
        Value::Object(map) => Some(map),
        other => {
            errors.push(
                GENERAL_FIELD,
                ViolationKind::InvalidType,
                format!(
                    "Expected object, received {}",
                    super::validators::json_type_name(other)
                ),
            );
            None
        }
    }
}

impl Schema for UserInput {
    const NAME: &'static str = "user";

    fn parse(input: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = expect_object(input, &mut errors) else {
            return Err(errors);
        };

        let name = required_string(object, "name", &mut errors)
            .filter(|name| check_length(name, "name", USER_NAME_MAX, "Name is required", &mut errors));

        let email = required_string(object, "email", &mut errors).filter(|email| {
            let valid = is_valid_email(email);
            if !valid {
                errors.push("email", ViolationKind::FormatInvalid, "Invalid email address");
            }
            valid
        });

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(UserInput {
                name: name.to_string(),
                email: email.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

impl Schema for PostInput {
    const NAME: &'static str = "post";

    fn parse(input: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = expect_object(input, &mut errors) else {
            return Err(errors);
        };

        let title = required_string(object, "title", &mut errors)
            .filter(|title| check_length(title, "title", POST_TITLE_MAX, "Title is required", &mut errors));
        let content = optional_string(object, "content", &mut errors);
        let published = bool_or(object, "published", false, &mut errors);

        match (title, content, published) {
            (Some(title), Some(content), Some(published)) if errors.is_empty() => Ok(PostInput {
                title: title.to_string(),
                content: content.map(str::to_string),
                published,
            }),
            _ => Err(errors),
        }
    }
}
