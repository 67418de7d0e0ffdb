//! Scripted counterpart of the board's update and delete buttons.
//!
//! [`QuoteClient`] sends the same fixed requests the browser script sends
//! and then reloads the page through a [`PageReload`]:
//!
//! - transport failure: error, no reload
//! - success status: body parsed as JSON (decode failure is an error, no
//!   reload), then one reload
//! - any other status: body ignored, then one reload

use std::time::Duration;

use async_trait::async_trait;
use quotes_core::quotes::{client_delete_payload, client_update_payload};
use reqwest::header::CACHE_CONTROL;
use reqwest::Method;
use serde_json::Value;

/// HTTP request timeout for a single call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A success response did not carry a JSON body.
    #[error("Response body is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

// ---------------------------------------------------------------------------
// Page reload
// ---------------------------------------------------------------------------

/// Reloads the quote board after an action.
#[async_trait]
pub trait PageReload: Send + Sync {
    async fn reload(&self) -> Result<(), ClientError>;
}

/// Reloads by fetching the board page with caching bypassed.
pub struct HttpPageReload {
    http: reqwest::Client,
    page_url: String,
}

impl HttpPageReload {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            page_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl PageReload for HttpPageReload {
    async fn reload(&self) -> Result<(), ClientError> {
        let response = self
            .http
            .get(&self.page_url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        tracing::info!(url = %self.page_url, status = %response.status(), "Page reloaded");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// QuoteClient
// ---------------------------------------------------------------------------

/// Issues the board's fixed update and delete requests.
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuoteClient {
    /// Create a client for the board served at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_http(http, base_url))
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn quotes_url(&self) -> String {
        format!("{}/quotes", self.base_url)
    }

    /// Send the fixed update (Darth Vadar replaces the latest Yoda quote),
    /// then reload.
    pub async fn trigger_update(
        &self,
        page: &dyn PageReload,
    ) -> Result<Option<Value>, ClientError> {
        self.send_then_reload(Method::PUT, client_update_payload(), page)
            .await
    }

    /// Send the fixed delete (first Elmer quote), then reload.
    pub async fn trigger_delete(
        &self,
        page: &dyn PageReload,
    ) -> Result<Option<Value>, ClientError> {
        self.send_then_reload(Method::DELETE, client_delete_payload(), page)
            .await
    }

    async fn send_then_reload(
        &self,
        method: Method,
        payload: Value,
        page: &dyn PageReload,
    ) -> Result<Option<Value>, ClientError> {
        let url = self.quotes_url();
        let response = self
            .http
            .request(method.clone(), &url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let data = if status.is_success() {
            let data: Value = response.json().await.map_err(ClientError::Decode)?;
            tracing::info!(%method, %url, %data, "Quote request succeeded");
            Some(data)
        } else {
            tracing::debug!(%method, %url, %status, "Quote request not successful");
            None
        };

        page.reload().await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = QuoteClient::with_http(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.quotes_url(), "http://localhost:8000/quotes");
    }

    #[test]
    fn reload_targets_board_root() {
        let reload = HttpPageReload::new(reqwest::Client::new(), "http://localhost:8000//");
        assert_eq!(reload.page_url, "http://localhost:8000/");
    }

    #[test]
    fn client_error_display_request() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = ClientError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
