//! Member Form Controller
//!
//! One handler per form. Each handler is a single linear flow:
//!
//! 1. validate the input; on failure show the message and stop
//! 2. issue one HTTP call
//! 3. report the outcome through the view
//!
//! Handlers keep no state between calls and may run concurrently; the
//! controller is cheap to clone into spawned tasks. When two searches
//! overlap, the one that resolves last owns the detail card.

use std::sync::Arc;

use shared::FormError;

use crate::api::MemberApi;
use crate::card::DetailCard;
use crate::config::{ClientConfig, UpdatePolicy};
use crate::error::ClientError;
use crate::form::{CreateForm, DeleteForm, SearchForm, UpdateForm};
use crate::http::HttpClient;
use crate::messages;
use crate::view::{MemberView, MessageKind};

/// Which branch a submission ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input rejected locally, no request sent
    Rejected,
    /// Server answered with a non-success status
    ServerError,
    /// Request could not complete, or the answer was unusable
    TransportError,
    /// Request succeeded
    Completed,
}

/// Binds the four member forms to the member API
pub struct MemberFormController<C, V> {
    api: MemberApi<C>,
    view: Arc<V>,
    update_policy: UpdatePolicy,
}

impl<C: Clone, V> Clone for MemberFormController<C, V> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            view: Arc::clone(&self.view),
            update_policy: self.update_policy,
        }
    }
}

impl<C: HttpClient, V: MemberView> MemberFormController<C, V> {
    pub fn new(http: C, view: Arc<V>, config: &ClientConfig) -> Self {
        Self {
            api: MemberApi::new(http),
            view,
            update_policy: config.update_policy,
        }
    }

    /// Create form submission
    pub async fn submit_create(&self, form: &CreateForm) -> Outcome {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(err) => return self.reject("create", err),
        };

        match self.api.create(&payload).await {
            Ok(()) => {
                tracing::info!(email = %payload.email, "member created");
                self.view
                    .show_message(MessageKind::Success, messages::CREATED);
                self.view.clear_form();
                Outcome::Completed
            }
            Err(err) if err.is_transport() => {
                self.transport_failure("create", &err, messages::CREATE_TRANSPORT)
            }
            Err(err) => {
                tracing::warn!(error = %err, "create rejected by server");
                self.view.show_message(
                    MessageKind::Error,
                    &messages::create_failed(err.body().unwrap_or_default()),
                );
                Outcome::ServerError
            }
        }
    }

    /// Search-by-id form submission
    pub async fn submit_search(&self, form: &SearchForm) -> Outcome {
        let id = match form.validate() {
            Ok(id) => id,
            Err(err) => return self.reject("search", err),
        };

        match self.api.get(&id).await {
            Ok(member) => {
                tracing::info!(%id, "member found");
                self.view.render_detail(DetailCard::new(member));
                Outcome::Completed
            }
            Err(err) if err.is_transport() => {
                self.transport_failure("search", &err, messages::SEARCH_TRANSPORT)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "search failed");
                self.view
                    .show_message(MessageKind::Error, messages::SEARCH_NOT_FOUND);
                Outcome::ServerError
            }
        }
    }

    /// Update form submission. Fields are left as typed on success.
    pub async fn submit_update(&self, form: &UpdateForm) -> Outcome {
        let (id, payload) = match form.validate(self.update_policy) {
            Ok(parts) => parts,
            Err(err) => return self.reject("update", err),
        };

        match self.api.update(&id, &payload).await {
            Ok(()) => {
                tracing::info!(%id, "member updated");
                self.view
                    .show_message(MessageKind::Success, messages::UPDATED);
                Outcome::Completed
            }
            Err(ClientError::NotFound(_)) => {
                tracing::warn!(%id, "update target not found");
                self.view
                    .show_message(MessageKind::Error, messages::UPDATE_NOT_FOUND);
                Outcome::ServerError
            }
            Err(err) if err.is_transport() => {
                self.transport_failure("update", &err, messages::UPDATE_TRANSPORT)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "update rejected by server");
                self.view.show_message(
                    MessageKind::Error,
                    &messages::update_failed(err.body().unwrap_or_default()),
                );
                Outcome::ServerError
            }
        }
    }

    /// Delete form submission
    pub async fn submit_delete(&self, form: &DeleteForm) -> Outcome {
        let id = match form.validate() {
            Ok(id) => id,
            Err(err) => return self.reject("delete", err),
        };

        match self.api.delete(&id).await {
            Ok(()) => {
                tracing::info!(%id, "member deleted");
                self.view
                    .show_message(MessageKind::Success, &messages::deleted(id.as_str()));
                Outcome::Completed
            }
            Err(ClientError::NotFound(_)) => {
                tracing::warn!(%id, "delete target not found");
                self.view
                    .show_message(MessageKind::Error, messages::DELETE_NOT_FOUND);
                Outcome::ServerError
            }
            Err(err) if err.is_transport() => {
                self.transport_failure("delete", &err, messages::DELETE_TRANSPORT)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "delete rejected by server");
                self.view.show_message(
                    MessageKind::Error,
                    &messages::delete_failed(err.body().unwrap_or_default()),
                );
                Outcome::ServerError
            }
        }
    }

    fn reject(&self, operation: &'static str, err: FormError) -> Outcome {
        tracing::warn!(operation, reason = ?err, "form rejected");
        self.view.show_message(MessageKind::Error, &err.to_string());
        Outcome::Rejected
    }

    /// The detail goes to the log only; the user gets the generic text.
    fn transport_failure(&self, operation: &'static str, err: &ClientError, text: &str) -> Outcome {
        tracing::error!(operation, error = %err, "request failed");
        self.view.show_message(MessageKind::Error, text);
        Outcome::TransportError
    }
}
