//! JSON documents accepted as market snapshots

use advisor_domain::{MarketSnapshot, SnapshotSource, StockQuote};
use serde::Deserialize;

/// Either the endpoint envelope `{ "data": [...], "source": "..." }`
/// or a bare array of quotes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SnapshotDocument {
    Envelope {
        data: Vec<StockQuote>,
        #[serde(default)]
        source: Option<String>,
    },
    Bare(Vec<StockQuote>),
}

impl SnapshotDocument {
    pub(crate) fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Convert, taking the source from the envelope when present.
    pub(crate) fn into_snapshot(self) -> MarketSnapshot {
        match self {
            SnapshotDocument::Envelope { data, source } => {
                MarketSnapshot::new(data, SnapshotSource::from_wire(source.as_deref()))
            }
            SnapshotDocument::Bare(data) => MarketSnapshot::new(data, SnapshotSource::Unknown),
        }
    }

    /// Convert, recording `source` regardless of what the document says.
    pub(crate) fn into_snapshot_from(self, source: SnapshotSource) -> MarketSnapshot {
        let quotes = match self {
            SnapshotDocument::Envelope { data, .. } | SnapshotDocument::Bare(data) => data,
        };
        MarketSnapshot::new(quotes, source)
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_ENVELOPE: &str = r#"{
    "data": [
        {"symbol":"RELIANCE","name":"Reliance Industries","sector":"Energy","price":2945.1,"change":0.84,"pe":27.3,"marketCap":"19.9L Cr"},
        {"symbol":"HDFCBANK","name":"HDFC Bank","sector":"Banking","price":1652.4,"change":-0.31,"pe":19.2,"marketCap":"12.6L Cr"}
    ],
    "source": "yahoo"
}"#;
