//! Typed representations of CyberAPI responses.

mod report;

pub use report::{GeoLocation, ThreatReport, MALICIOUS_RISK_THRESHOLD};
