use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

/// Path of the create-document endpoint, joined onto the base URL once at
/// construction.
const CREATE_DOCUMENT_PATH: &str = "api/v3/lk/documents/create";

/// The base URL could not be combined with the document path.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot join document path onto base url: {0}")]
pub struct InvalidEndpoint(String);

/// Errors produced by a single submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The registry answered with a non-success status.
    #[error("registry returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request never completed (connection, TLS, timeout below HTTP).
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),
}

/// One outbound submission of an already-encoded payload.
///
/// Implementations perform exactly one attempt and never retry; retry policy
/// belongs to the caller, after the rate limit has been consulted again.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Posts `payload` with its detached `signature`, returning the response
    /// body on success.
    async fn submit(&self, payload: &str, signature: &str) -> Result<String, TransportError>;
}

/// `reqwest`-backed submitter posting to a fixed endpoint.
///
/// The endpoint is an immutable value computed once from the base URL; the
/// path is never appended to shared mutable state.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    /// Builds a submitter for the registry at `base`.
    ///
    /// If `base` carries a path it must end with `/`, otherwise its last
    /// segment is replaced by the document path during joining.
    pub fn new(base: &Url) -> Result<Self, InvalidEndpoint> {
        let endpoint = base
            .join(CREATE_DOCUMENT_PATH)
            .map_err(|e| InvalidEndpoint(e.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &str, signature: &str) -> Result<String, TransportError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header("Signature", signature)
            .body(payload.to_owned())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "registry rejected the submission");
            return Err(TransportError::Status { status, body });
        }

        tracing::debug!(%status, bytes = body.len(), "registry accepted the submission");
        Ok(body)
    }
}
