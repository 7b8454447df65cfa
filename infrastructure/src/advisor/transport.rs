//! HTTP transport for the advisory stream.
//!
//! Posts the request as JSON and hands the chunked response body to the
//! application layer untouched. Framing and decoding happen upstream in the
//! session controller.

use advisor_application::{AdvisoryTransport, ChunkStream, TransportError};
use advisor_domain::AdvisoryRequest;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use tracing::{debug, warn};

/// Streams advisory responses from `POST <endpoint>`.
///
/// The client has no overall request timeout: a response may legitimately
/// keep streaming for minutes, and the session controller owns cancellation.
pub struct HttpAdvisoryTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAdvisoryTransport {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("stock-advisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AdvisoryTransport for HttpAdvisoryTransport {
    async fn open(&self, request: &AdvisoryRequest) -> Result<ChunkStream, TransportError> {
        let body =
            serde_json::to_vec(request).map_err(|e| TransportError::Encode(e.to_string()))?;

        debug!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            "Posting advisory request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "text/event-stream")
            .header(CACHE_CONTROL, "no-cache")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "Advisory endpoint rejected request");
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }
        if status == StatusCode::NO_CONTENT {
            return Err(TransportError::MissingBody);
        }

        debug!(
            status = status.as_u16(),
            content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(""),
            "Advisory response headers received"
        );

        Ok(response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| TransportError::Read(e.to_string()))
            })
            .boxed())
    }
}
