//! HTTP client for the CyberAPI threat intelligence API.
//!
//! This crate provides the main [`CyberApiClient`] for querying the CyberAPI
//! `/check` endpoint.

#![doc(html_root_url = "https://docs.rs/cyberapi-client/1.0.0")]

mod client;
pub mod api;

pub use client::{CyberApiClient, CyberApiClientBuilder};
pub use cyberapi_core::{CyberApiError, Result};
