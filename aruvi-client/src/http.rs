//! HTTP transport: envelope-aware request helpers

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;

/// Thin wrapper over `reqwest::Client` that joins paths onto the base URL
/// and unwraps the `{success, data?, message?, error?}` envelope.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request for a plain-text resource (no envelope)
    pub async fn get_text(&self, path: &str) -> ClientResult<String> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::api(status.as_str(), text));
        }
        Ok(response.text().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Unwrap the response envelope.
    ///
    /// A call counts as failed when the transport status is non-2xx or the
    /// envelope says `success: false`; the server-supplied error message is
    /// surfaced when present.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let envelope: ApiResponse<T> = match response.json().await {
            Ok(body) => body,
            Err(e) if !status.is_success() => {
                return Err(ClientError::api(status.as_str(), e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() || !envelope.success {
            let (code, message) = match envelope.error {
                Some(err) => (err.code, err.message),
                None => (
                    status.as_str().to_string(),
                    envelope
                        .message
                        .unwrap_or_else(|| "API request failed".to_string()),
                ),
            };
            tracing::debug!(%code, %message, "api call failed");
            return Err(ClientError::api(code, message));
        }

        envelope.data.ok_or(ClientError::EmptyData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_join_tolerates_slashes() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8080/v1/"));
        assert_eq!(client.url("products"), "http://localhost:8080/v1/products");
        assert_eq!(
            client.url("/orders/table1/items"),
            "http://localhost:8080/v1/orders/table1/items"
        );
    }
}
