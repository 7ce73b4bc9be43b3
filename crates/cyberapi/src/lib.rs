//! Rust client for the CyberAPI threat intelligence API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cyberapi::CyberApiClient;
//!
//! #[tokio::main]
//! async fn main() -> cyberapi::Result<()> {
//!     let client = CyberApiClient::new("your-api-key");
//!
//!     // Full threat report
//!     let report = client.check().domain("example.com").send().await?;
//!     println!("Risk score: {:?}", report.risk_score);
//!     println!("Signals: {:?}", report.signals);
//!
//!     // Quick verdict
//!     if client.check().ip("1.2.3.4").is_malicious().await? {
//!         println!("Block it");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/cyberapi/1.0.0")]

// Re-export core types
pub use cyberapi_core::*;

// Re-export client
pub use cyberapi_client::{CyberApiClient, CyberApiClientBuilder};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
