//! Market snapshot over HTTP

use super::wire::SnapshotDocument;
use advisor_application::{MarketDataError, MarketDataProvider};
use advisor_domain::MarketSnapshot;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Default timeout for the snapshot request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the snapshot with `GET <endpoint>`.
pub struct HttpMarketDataProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMarketDataProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("stock-advisor/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| MarketDataError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for HttpMarketDataProvider {
    async fn snapshot(&self) -> Result<MarketSnapshot, MarketDataError> {
        debug!(endpoint = %self.endpoint, "Fetching market snapshot");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| MarketDataError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MarketDataError::Connection(e.to_string()))?;
        let snapshot = SnapshotDocument::parse(&body)
            .map_err(|e| MarketDataError::Decode(e.to_string()))?
            .into_snapshot();

        info!(
            quotes = snapshot.len(),
            source = %snapshot.source(),
            "Market snapshot loaded"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::wire::SAMPLE_ENVELOPE;
    use advisor_domain::SnapshotSource;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/stocks"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn provider(server: &MockServer) -> HttpMarketDataProvider {
        HttpMarketDataProvider::new(format!("{}/api/stocks", server.uri()), DEFAULT_TIMEOUT)
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetches_snapshot() {
        let server = serve(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(SAMPLE_ENVELOPE),
        )
        .await;

        let snapshot = provider(&server).snapshot().await.unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.source(), SnapshotSource::Live);
        assert_eq!(snapshot.quotes()[1].symbol, "HDFCBANK");
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_status_error() {
        let server = serve(ResponseTemplate::new(500).set_body_string("boom")).await;
        let err = provider(&server).snapshot().await.unwrap_err();
        assert!(matches!(err, MarketDataError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_decode_error() {
        let server = serve(ResponseTemplate::new(200).set_body_string("{\"data\": 3}")).await;
        let err = provider(&server).snapshot().await.unwrap_err();
        assert!(matches!(err, MarketDataError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE_ENVELOPE)
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .await;
        let provider = HttpMarketDataProvider::new(
            format!("{}/api/stocks", server.uri()),
            std::time::Duration::from_millis(100),
        )
        .unwrap();

        let err = provider.snapshot().await.unwrap_err();
        assert!(matches!(err, MarketDataError::Connection(_)));
    }
}
