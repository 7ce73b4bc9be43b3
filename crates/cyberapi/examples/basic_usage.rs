//! Basic example demonstrating CyberAPI usage.
//!
//! Run with: cargo run --example basic_usage
//!
//! Set the CYBERAPI_KEY environment variable before running.

use cyberapi::{CyberApiClient, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Get API key from environment
    let api_key = std::env::var("CYBERAPI_KEY")
        .expect("CYBERAPI_KEY environment variable is required");

    // Create client
    let client = CyberApiClient::new(&api_key);

    // Full threat report for a domain
    println!("=== Domain Report: example.com ===");
    let report = client.check().domain("example.com").send().await?;
    println!("Risk score: {:?}", report.risk_score);
    println!("Verdict: {:?}", report.verdict);
    println!("Signals: {:?}", report.signals);
    if let Some(geo) = &report.geo_location {
        println!("Country: {:?}", geo.country);
        println!("ISP: {:?}", geo.isp);
    }
    println!();

    // Quick verdict for an IP
    println!("=== IP Verdict: 1.2.3.4 ===");
    let malicious = client.check().ip("1.2.3.4").is_malicious().await?;
    println!("Malicious: {malicious}");
    println!();

    // Just the threat signals
    println!("=== Signals ===");
    let signals = client.check().domain("example.com").signals().await?;
    if signals.is_empty() {
        println!("No threat signals detected");
    }
    for signal in &signals {
        println!("  - {signal}");
    }

    Ok(())
}
