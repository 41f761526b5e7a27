//! HTTP transport
//!
//! [`HttpClient`] hides how a request reaches the backend: over the
//! network with reqwest, or in memory against an axum `Router`.

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

use async_trait::async_trait;
use serde::Serialize;

use crate::ClientResult;

pub use network::NetworkHttpClient;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;

/// HTTP client trait
///
/// Paths are relative to the resource base (e.g. `crear`, `eliminar/7`).
/// Every method resolves to the success body as text; a non-success status
/// becomes [`crate::ClientError::NotFound`] or [`crate::ClientError::Status`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str) -> ClientResult<String>;
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String>;
    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String>;
    async fn delete(&self, path: &str) -> ClientResult<String>;
}

/// Join a base and a relative path with exactly one slash.
pub(crate) fn join_path(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
