use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use window_gate::Gate;
use window_gate::SlidingLog;

use crate::document;
use crate::document::Document;
use crate::error::SubmitError;
use crate::transport::HttpSubmitter;
use crate::transport::InvalidEndpoint;
use crate::transport::Submitter;

/// Rate-limited client for the registry's create-document operation.
///
/// The gate is held behind an `Arc` so one window can be shared by any
/// number of clones or by callers that keep their own handle to it. Both
/// seams are generic: tests swap in a recording [`Submitter`] to verify that
/// a denied call never reaches the transport.
#[derive(Debug)]
pub struct RegistryClient<G = SlidingLog, S = HttpSubmitter> {
    gate: Arc<G>,
    submitter: S,
}

// Manual Clone: clones share the gate, so G itself need not be Clone.
impl<G, S> Clone for RegistryClient<G, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
            submitter: self.submitter.clone(),
        }
    }
}

impl RegistryClient {
    /// Builds a client admitting at most `capacity` submissions per
    /// `window`, posting to the registry at `base`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn new(base: Url, window: Duration, capacity: usize) -> Result<Self, InvalidEndpoint> {
        Ok(Self {
            gate: Arc::new(SlidingLog::new(window, capacity)),
            submitter: HttpSubmitter::new(&base)?,
        })
    }
}

impl<G, S> RegistryClient<G, S>
where
    G: Gate,
    S: Submitter,
{
    /// Assembles a client from an existing gate and submitter.
    pub fn from_parts(gate: Arc<G>, submitter: S) -> Self {
        Self { gate, submitter }
    }

    pub fn gate(&self) -> &Arc<G> {
        &self.gate
    }

    /// Submits one document with its detached signature.
    ///
    /// The gate is consulted first: a denial returns
    /// [`SubmitError::RateLimited`] before any encoding or network I/O. On
    /// admission the document is encoded and posted once; the admission slot
    /// is consumed whether or not the registry accepts it.
    pub async fn create_document(
        &self,
        document: &Document,
        signature: &str,
    ) -> Result<String, SubmitError> {
        if self.gate.try_admit().is_denied() {
            tracing::debug!("admission denied; submission skipped");
            return Err(SubmitError::RateLimited);
        }

        let payload = document::encode(document)?;
        let body = self.submitter.submit(&payload, signature).await?;

        Ok(body)
    }
}
