//! Market snapshot from a local JSON file

use super::wire::SnapshotDocument;
use advisor_application::{MarketDataError, MarketDataProvider};
use advisor_domain::{MarketSnapshot, SnapshotSource};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Reads either the endpoint envelope or a bare array of quotes.
pub struct FileMarketDataProvider {
    path: PathBuf,
}

impl FileMarketDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MarketDataProvider for FileMarketDataProvider {
    async fn snapshot(&self) -> Result<MarketSnapshot, MarketDataError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let snapshot = SnapshotDocument::parse(&bytes)
            .map_err(|e| MarketDataError::Decode(format!("{}: {}", self.path.display(), e)))?
            .into_snapshot_from(SnapshotSource::File);

        info!(
            path = %self.path.display(),
            quotes = snapshot.len(),
            "Market snapshot loaded from file"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::wire::SAMPLE_ENVELOPE;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_envelope_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_ENVELOPE.as_bytes()).unwrap();

        let provider = FileMarketDataProvider::new(file.path());
        let snapshot = provider.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.source(), SnapshotSource::File);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileMarketDataProvider::new(dir.path().join("missing.json"));
        let err = provider.snapshot().await.unwrap_err();
        assert!(matches!(err, MarketDataError::Io(_)));
    }

    #[tokio::test]
    async fn test_invalid_file_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"symbol\": 1}]").unwrap();

        let provider = FileMarketDataProvider::new(file.path());
        let err = provider.snapshot().await.unwrap_err();
        assert!(matches!(err, MarketDataError::Decode(_)));
    }
}
