use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Risk score at or above which a target is considered malicious.
///
/// Fixed client-side policy; the server does not supply it.
pub const MALICIOUS_RISK_THRESHOLD: f64 = 80.0;

/// Threat intelligence report for a domain or IP address
///
/// Every field is optional: the client does not enforce a response schema,
/// it decodes whatever the server returns. Fields the server sent that are
/// not modeled here are preserved in [`extra`](Self::extra).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatReport {
    /// Numeric risk score; range is defined by the server
    #[serde(default)]
    pub risk_score: Option<f64>,

    /// Human-readable verdict (e.g. "malicious", "clean")
    #[serde(default)]
    pub verdict: Option<String>,

    /// Domain the report refers to, when a domain was queried
    #[serde(default)]
    pub domain: Option<String>,

    /// IP address the report refers to, when an IP was queried
    #[serde(default)]
    pub ip: Option<String>,

    /// Detected threat signals, in server order
    #[serde(default)]
    pub signals: Option<Vec<String>>,

    /// Geolocation of the resolved IP
    #[serde(default)]
    pub geo_location: Option<GeoLocation>,

    /// DNS security posture (DNSSEC, SPF, DMARC, ...)
    #[serde(default)]
    pub dns_security: Option<Map<String, Value>>,

    /// TLS certificate details
    #[serde(default)]
    pub ssl_info: Option<Map<String, Value>>,

    /// Detected technology stack
    #[serde(default)]
    pub tech_stack: Option<Map<String, Value>>,

    /// HTTP security headers observed on the target
    #[serde(default)]
    pub security_headers: Option<Map<String, Value>>,

    /// Whether the server answered from its cache
    #[serde(default)]
    pub cached: bool,

    /// Server-side processing time in milliseconds
    #[serde(default)]
    pub process_time_ms: Option<u64>,

    /// Any response fields not modeled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThreatReport {
    /// Returns true if the risk score meets [`MALICIOUS_RISK_THRESHOLD`]
    ///
    /// A missing score counts as 0 and is therefore not malicious.
    #[must_use]
    pub fn is_malicious(&self) -> bool {
        self.risk_score.unwrap_or(0.0) >= MALICIOUS_RISK_THRESHOLD
    }
}

/// Geolocation information for an IP address
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    /// IP address the location refers to
    #[serde(default)]
    pub ip: Option<String>,

    /// Country name or code
    #[serde(default)]
    pub country: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// ISP name
    #[serde(default)]
    pub isp: Option<String>,

    /// Whether the IP belongs to a hosting provider
    #[serde(default)]
    pub is_hosting: bool,

    /// Risk score attributed to the location itself
    #[serde(default)]
    pub risk_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_report() {
        let report: ThreatReport = serde_json::from_str(
            r#"{
                "risk_score": 92,
                "verdict": "malicious",
                "domain": "evil.test",
                "signals": ["malware-c2", "recent-registration"],
                "geo_location": {
                    "ip": "203.0.113.7",
                    "country": "XX",
                    "is_hosting": true
                },
                "cached": true,
                "process_time_ms": 120
            }"#,
        )
        .unwrap();

        assert_eq!(report.risk_score, Some(92.0));
        assert_eq!(report.verdict.as_deref(), Some("malicious"));
        assert_eq!(report.domain.as_deref(), Some("evil.test"));
        assert_eq!(
            report.signals,
            Some(vec![
                "malware-c2".to_string(),
                "recent-registration".to_string()
            ])
        );
        let geo = report.geo_location.unwrap();
        assert_eq!(geo.ip.as_deref(), Some("203.0.113.7"));
        assert!(geo.is_hosting);
        assert!(report.cached);
        assert_eq!(report.process_time_ms, Some(120));
    }

    #[test]
    fn test_deserialize_empty_report() {
        let report: ThreatReport = serde_json::from_str("{}").unwrap();

        assert_eq!(report.risk_score, None);
        assert_eq!(report.signals, None);
        assert!(!report.cached);
        assert!(report.extra.is_empty());
        assert!(!report.is_malicious());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let report: ThreatReport = serde_json::from_str(
            r#"{"risk_score": 10, "reputation_sources": ["feed-a", "feed-b"]}"#,
        )
        .unwrap();

        assert_eq!(
            report.extra.get("reputation_sources"),
            Some(&serde_json::json!(["feed-a", "feed-b"]))
        );
    }

    #[test]
    fn test_malicious_threshold_boundary() {
        let at = ThreatReport {
            risk_score: Some(80.0),
            ..empty_report()
        };
        assert!(at.is_malicious());

        let below = ThreatReport {
            risk_score: Some(79.9),
            ..empty_report()
        };
        assert!(!below.is_malicious());

        let missing = empty_report();
        assert!(!missing.is_malicious());
    }

    fn empty_report() -> ThreatReport {
        serde_json::from_str("{}").unwrap()
    }
}
