// member-client/src/http/oneshot.rs
// Oneshot HTTP client - in-memory calls against an axum Router
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::{HttpClient, join_path};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives the Router directly with Tower's `oneshot`, no socket involved.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use member_client::OneshotHttpClient;
///
/// let router: Router = backend_routes().with_state(state);
/// let client = OneshotHttpClient::new(router).with_base_path("/miembros");
///
/// let body = client.get("7").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    base_path: String,
}

impl OneshotHttpClient {
    /// Create a client over a Router that already has its state attached.
    pub fn new(router: Router) -> Self {
        Self {
            router,
            base_path: String::new(),
        }
    }

    /// Prefix every path with the resource base (e.g. "/miembros").
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into().trim_end_matches('/').to_string();
        self
    }

    fn build_request(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<Request<Body>> {
        let uri = join_path(&self.base_path, path);
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bytes)),
            None => builder.body(Body::empty()),
        };
        request.map_err(|e| ClientError::Transport(format!("Failed to build request: {e}")))
    }

    async fn execute(&self, request: Request<Body>) -> ClientResult<String> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "oneshot");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Transport(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read body: {e}")))?;
        let text = String::from_utf8_lossy(&body_bytes).into_owned();

        if !status.is_success() {
            return Err(ClientError::from_status(status, text));
        }
        Ok(text)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get(&self, path: &str) -> ClientResult<String> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let request = self.build_request(Method::POST, path, Some(serde_json::to_vec(body)?))?;
        self.execute(request).await
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let request = self.build_request(Method::PUT, path, Some(serde_json::to_vec(body)?))?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<String> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute(request).await
    }
}
