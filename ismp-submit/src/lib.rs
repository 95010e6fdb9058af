//! # ismp-submit
//!
//! `ismp-submit` submits product-marking documents to the ISMP registration
//! service while a shared [`window_gate`] admission gate enforces a hard cap
//! on submissions per trailing time window, across all concurrent callers.
//!
//! ## Pipeline
//!
//! Every call to [`RegistryClient::create_document`] runs three steps:
//!
//! 1. **Admission**: consult the gate. A denial short-circuits immediately —
//!    no encoding, no network I/O, no side effects.
//! 2. **Encoding**: serialize the [`Document`] into the registry's canonical
//!    JSON form.
//! 3. **Submission**: one POST to the create-document endpoint with the
//!    detached signature. No retries; failures are surfaced, never swallowed.
//!
//! The caller sees a three-way outcome: `Ok(body)` on remote acceptance,
//! [`SubmitError::RateLimited`] when the gate denied (nothing was sent), or
//! [`SubmitError::Submission`] when the network attempt failed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ismp_submit::RegistryClient;
//! use reqwest::Url;
//! use std::time::Duration;
//!
//! # fn sample_document() -> ismp_submit::Document { unimplemented!() }
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("https://ismp.example")?;
//! let client = RegistryClient::new(base, Duration::from_secs(1), 2)?;
//!
//! let body = client.create_document(&sample_document(), "signed").await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod document;
mod error;
mod transport;

#[cfg(test)]
mod tests;

pub use client::RegistryClient;
pub use document::Description;
pub use document::DocType;
pub use document::Document;
pub use document::Product;
pub use document::encode;
pub use error::SubmitError;
pub use transport::HttpSubmitter;
pub use transport::InvalidEndpoint;
pub use transport::Submitter;
pub use transport::TransportError;
