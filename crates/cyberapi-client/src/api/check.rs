//! Threat check endpoint.

use crate::CyberApiClient;
use cyberapi_core::{CyberApiError, Result, ThreatReport};

/// Builder for threat check requests
///
/// At least one of [`domain`](Self::domain) or [`ip`](Self::ip) must be set
/// before sending. Both may be set; the server decides precedence.
pub struct CheckRequestBuilder<'a> {
    client: &'a CyberApiClient,
    domain: Option<String>,
    ip: Option<String>,
}

impl<'a> CheckRequestBuilder<'a> {
    pub(crate) fn new(client: &'a CyberApiClient) -> Self {
        Self {
            client,
            domain: None,
            ip: None,
        }
    }

    /// Domain name to check (e.g. "example.com")
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// IP address to check (e.g. "1.2.3.4")
    #[must_use]
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Execute the request and return the full threat report
    ///
    /// Issues exactly one GET to `/check`; failures are never retried.
    /// Fails with [`CyberApiError::InvalidArgument`], without touching the
    /// network, when neither a domain nor an IP was set. Empty strings count
    /// as not set and are never sent as query parameters.
    pub async fn send(self) -> Result<ThreatReport> {
        let mut params = Vec::new();

        if let Some(ref domain) = self.domain {
            if !domain.is_empty() {
                params.push(("domain", domain.as_str()));
            }
        }
        if let Some(ref ip) = self.ip {
            if !ip.is_empty() {
                params.push(("ip", ip.as_str()));
            }
        }

        if params.is_empty() {
            return Err(CyberApiError::InvalidArgument(
                "either a domain or an ip must be provided".to_string(),
            ));
        }

        self.client.get_with_query("/check", &params).await
    }

    /// Execute the request and report whether the target is malicious
    ///
    /// True when the risk score reaches
    /// [`MALICIOUS_RISK_THRESHOLD`](cyberapi_core::MALICIOUS_RISK_THRESHOLD).
    /// A report without a risk score is not malicious.
    pub async fn is_malicious(self) -> Result<bool> {
        let report = self.send().await?;
        Ok(report.is_malicious())
    }

    /// Execute the request and return the detected threat signals
    ///
    /// Signals are returned in server order, unmodified. A report without a
    /// `signals` field yields an empty list.
    pub async fn signals(self) -> Result<Vec<String>> {
        let report = self.send().await?;
        Ok(report.signals.unwrap_or_default())
    }
}
