// member-client/src/http/network.rs
// Network HTTP client (reqwest)

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::{ClientConfig, ClientError, ClientResult};

use super::{HttpClient, join_path};

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resource base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, text));
        }
        Ok(text)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get(&self, path: &str) -> ClientResult<String> {
        let url = join_path(&self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let url = join_path(&self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let url = join_path(&self.base_url, path);
        tracing::debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<String> {
        let url = join_path(&self.base_url, path);
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        Self::handle_response(response).await
    }
}
