//! Main CyberAPI client implementation.

use crate::api::CheckRequestBuilder;
use cyberapi_core::{CyberApiError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The CyberAPI base URL
const DEFAULT_BASE_URL: &str = "https://threats.cyberapi.io/api/v1";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API key on every request
const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Main CyberAPI client
///
/// Holds the API key and a pooled HTTP session; cloning is cheap and clones
/// share the session, so one client can be used across tasks.
#[derive(Clone)]
pub struct CyberApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl CyberApiClient {
    /// Create a new client with the given API key using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        CyberApiClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> CyberApiClientBuilder {
        CyberApiClientBuilder::new(api_key)
    }

    /// Check a domain or IP address for threats
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let report = client.check().domain("example.com").send().await?;
    /// println!("Risk score: {:?}", report.risk_score);
    /// ```
    #[must_use]
    pub fn check(&self) -> CheckRequestBuilder<'_> {
        CheckRequestBuilder::new(self)
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CyberApiError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| CyberApiError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(CyberApiError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a [`CyberApiError`]
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // API error responses carry the message in a "detail" field
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 => Err(CyberApiError::Unauthorized),
            429 => {
                warn!("Rate limited by CyberAPI");
                Err(CyberApiError::RateLimited { retry_after: None })
            }
            _ => Err(CyberApiError::Api { status, message }),
        }
    }
}

/// Builder for configuring a [`CyberApiClient`]
pub struct CyberApiClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl CyberApiClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cyberapi-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    ///
    /// Trailing slashes are stripped when the client is built.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    ///
    /// No network activity happens here; the first request is sent by the
    /// first operation invoked on the client.
    #[must_use]
    pub fn build(self) -> CyberApiClient {
        let mut api_key =
            HeaderValue::from_str(&self.api_key).expect("API key is not a valid header value");
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        CyberApiClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slashes_stripped() {
        let client = CyberApiClient::builder("k1")
            .base_url("https://custom.test/api/v2/")
            .build();
        assert_eq!(
            client.build_url("/check", &[]),
            "https://custom.test/api/v2/check"
        );

        let client = CyberApiClient::builder("k1")
            .base_url("https://custom.test/api/v2//")
            .build();
        assert_eq!(
            client.build_url("/check", &[]),
            "https://custom.test/api/v2/check"
        );
    }

    #[test]
    fn test_build_url_with_params() {
        let client = CyberApiClient::builder("k1")
            .base_url("https://custom.test/api/v1")
            .build();
        assert_eq!(
            client.build_url("/check", &[("domain", "example.com"), ("ip", "1.2.3.4")]),
            "https://custom.test/api/v1/check?domain=example.com&ip=1.2.3.4"
        );
    }

    #[test]
    fn test_build_url_encodes_values() {
        let client = CyberApiClient::builder("k1")
            .base_url("https://custom.test/api/v1")
            .build();
        assert_eq!(
            client.build_url("/check", &[("domain", "a&b=c.test")]),
            "https://custom.test/api/v1/check?domain=a%26b%3Dc.test"
        );
    }
}
