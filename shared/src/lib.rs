//! Shared types for the member management client
//!
//! Wire DTOs exchanged with the `/miembros` backend and the input
//! validation rules applied before anything is sent.

pub mod models;
pub mod validation;

// Re-exports
pub use models::{Member, MemberId, MemberPayload};
pub use validation::FormError;
