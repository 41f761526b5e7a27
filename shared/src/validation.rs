//! Input validation helpers
//!
//! Rules applied to form input before a request is built. The error
//! `Display` text is the message shown to the user.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::MemberPayload;

/// Basic `local@domain.tld` shape. Unanchored: a match anywhere passes.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Hint shown next to an empty required field while it is being edited.
pub const REQUIRED_FIELD_HINT: &str = "Debes completar este campo.";

/// Client-side validation failure. The request is never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// One of nombre, apellido, email is empty
    #[error("Todos los campos (nombre, apellido y email) son obligatorios.")]
    MissingFields,

    /// Partial update with every text field empty
    #[error("Debes ingresar al menos un campo para actualizar.")]
    MissingAnyField,

    /// Email does not look like `local@domain.tld`
    #[error("Por favor, ingresa un correo electrónico válido.")]
    InvalidEmail,

    /// Identifier field is empty
    #[error("Por favor, ingresa un ID válido.")]
    MissingId,
}

/// Check the email shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Hint for a single live-edited required field.
pub fn required_field_hint(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(REQUIRED_FIELD_HINT)
}

/// Every text field required and the email well formed (create, full update).
pub fn validate_complete(payload: &MemberPayload) -> Result<(), FormError> {
    payload.validate().map_err(|errors| classify(&errors))
}

/// At least one text field required; email checked only when present.
pub fn validate_partial(payload: &MemberPayload) -> Result<(), FormError> {
    if payload.is_blank() {
        return Err(FormError::MissingAnyField);
    }
    if !payload.email.is_empty() && !is_valid_email(&payload.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Missing fields take precedence over a malformed email.
fn classify(errors: &ValidationErrors) -> FormError {
    let missing = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .any(|err| err.code == "length");

    if missing {
        FormError::MissingFields
    } else {
        FormError::InvalidEmail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(first: &str, last: &str, email: &str) -> MemberPayload {
        MemberPayload::from_input(first, last, email, false)
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("ana@x"));
        assert!(!is_valid_email("ana.x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_complete_requires_every_field() {
        assert_eq!(validate_complete(&payload("Ana", "Lopez", "ana@x.com")), Ok(()));
        assert_eq!(
            validate_complete(&payload("", "Lopez", "ana@x.com")),
            Err(FormError::MissingFields)
        );
        assert_eq!(
            validate_complete(&payload("Ana", "", "ana@x.com")),
            Err(FormError::MissingFields)
        );
        assert_eq!(
            validate_complete(&payload("Ana", "Lopez", "   ")),
            Err(FormError::MissingFields)
        );
    }

    #[test]
    fn test_complete_rejects_bad_email() {
        assert_eq!(
            validate_complete(&payload("Ana", "Lopez", "ana-at-x")),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn test_missing_fields_win_over_bad_email() {
        assert_eq!(
            validate_complete(&payload("", "Lopez", "ana-at-x")),
            Err(FormError::MissingFields)
        );
    }

    #[test]
    fn test_partial_rules() {
        assert_eq!(validate_partial(&payload("Ana", "", "")), Ok(()));
        assert_eq!(validate_partial(&payload("", "", "")), Err(FormError::MissingAnyField));
        assert_eq!(
            validate_partial(&payload("", "", "nope")),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Todos los campos (nombre, apellido y email) son obligatorios."
        );
        assert_eq!(FormError::MissingId.to_string(), "Por favor, ingresa un ID válido.");
        assert_eq!(required_field_hint(" "), Some(REQUIRED_FIELD_HINT));
        assert_eq!(required_field_hint("Ana"), None);
    }
}
