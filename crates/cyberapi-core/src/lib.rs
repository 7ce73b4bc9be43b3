//! Core types for the CyberAPI threat intelligence client.
//!
//! This crate provides the foundational types used across the CyberAPI library:
//!
//! - **Types**: Typed representations of CyberAPI threat reports
//! - **Errors**: Error handling with [`CyberApiError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use cyberapi_core::{ThreatReport, CyberApiError, Result};
//!
//! fn process_report(report: ThreatReport) -> Result<()> {
//!     println!("Risk score: {:?}", report.risk_score);
//!     println!("Signals: {:?}", report.signals);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/cyberapi-core/1.0.0")]

mod error;
pub mod types;

pub use error::{CyberApiError, Result};
pub use types::*;
