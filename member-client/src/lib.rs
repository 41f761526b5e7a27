//! Member Client - form controller for the `/miembros` REST resource
//!
//! Binds the four member forms (create, search, update, delete) to HTTP
//! calls and reports the outcome through a [`MemberView`].

pub mod api;
pub mod card;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod messages;
pub mod view;

pub use api::MemberApi;
pub use card::DetailCard;
pub use config::{ClientConfig, UpdatePolicy};
pub use controller::{MemberFormController, Outcome};
pub use error::{ClientError, ClientResult};
pub use form::{CreateForm, DeleteForm, SearchForm, UpdateForm};
#[cfg(feature = "in-process")]
pub use http::OneshotHttpClient;
pub use http::{HttpClient, NetworkHttpClient};
pub use view::{ChannelView, MemberView, MessageKind, ViewEvent};

// Re-export shared types for convenience
pub use shared::validation::required_field_hint;
pub use shared::{FormError, Member, MemberId, MemberPayload};
