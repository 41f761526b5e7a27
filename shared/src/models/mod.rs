//! Data models
//!
//! Field names on the wire are the backend's Spanish names
//! (`nombre`, `apellido`, `email`, `activo`).

pub mod member;

// Re-exports
pub use member::*;
