//! Form input
//!
//! Raw field values as typed by the user. `validate` trims and checks them
//! and yields what the request needs, or the [`FormError`] to show.

use shared::validation::{validate_complete, validate_partial};
use shared::{FormError, MemberId, MemberPayload};

use crate::config::UpdatePolicy;

/// Create form: nombre, apellido, email, activo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
}

impl CreateForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            active,
        }
    }

    pub fn validate(&self) -> Result<MemberPayload, FormError> {
        let payload =
            MemberPayload::from_input(&self.first_name, &self.last_name, &self.email, self.active);
        validate_complete(&payload)?;
        Ok(payload)
    }
}

/// Search-by-id form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub id: String,
}

impl SearchForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn validate(&self) -> Result<MemberId, FormError> {
        MemberId::parse(&self.id)
    }
}

/// Update form: id plus the create fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
}

impl UpdateForm {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            active,
        }
    }

    pub fn validate(&self, policy: UpdatePolicy) -> Result<(MemberId, MemberPayload), FormError> {
        let id = MemberId::parse(&self.id)?;
        let payload =
            MemberPayload::from_input(&self.first_name, &self.last_name, &self.email, self.active);
        match policy {
            UpdatePolicy::Full => validate_complete(&payload)?,
            UpdatePolicy::Partial => validate_partial(&payload)?,
        }
        Ok((id, payload))
    }
}

/// Delete-by-id form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteForm {
    pub id: String,
}

impl DeleteForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn validate(&self) -> Result<MemberId, FormError> {
        MemberId::parse(&self.id)
    }
}
