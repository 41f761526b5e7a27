//! Member Model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::validation::{EMAIL_PATTERN, FormError};

/// Member entity as returned by `GET /miembros/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    #[serde(rename = "nombre", default, deserialize_with = "nullable_string")]
    pub first_name: String,
    #[serde(rename = "apellido", default, deserialize_with = "nullable_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(rename = "activo", default)]
    pub active: bool,
}

/// Create / update member payload (no id, the server assigns it)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MemberPayload {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(rename = "apellido")]
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1), regex(path = *EMAIL_PATTERN))]
    pub email: String,
    #[serde(rename = "activo")]
    pub active: bool,
}

impl MemberPayload {
    /// Build a payload from raw form values, trimming every text field.
    pub fn from_input(first_name: &str, last_name: &str, email: &str, active: bool) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            active,
        }
    }

    /// True when none of the three text fields carries a value.
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty() && self.email.is_empty()
    }
}

/// Member identifier as typed into a form.
///
/// The backend keys members by integer, but the client forwards whatever
/// the user entered and lets the server reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Trim the raw input; an empty identifier is rejected.
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FormError::MissingId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The backend serializes unset text columns as `null`.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
