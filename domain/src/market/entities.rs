//! Market snapshot entities

use serde::{Deserialize, Serialize};

/// A single instrument record as served by the market-data endpoint.
///
/// Field names on the wire follow the endpoint's JSON shape
/// (`change`, `pe`, `marketCap`), which is also what the advisory
/// endpoint expects inside its `stocks` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
    /// Day change in percent.
    #[serde(rename = "change")]
    pub percent_change: f64,
    #[serde(rename = "pe")]
    pub price_to_earnings: f64,
    /// Human-readable market capitalisation (e.g. "15.2L Cr").
    #[serde(rename = "marketCap")]
    pub market_cap_label: String,
}

/// Where a [`MarketSnapshot`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotSource {
    /// Live quotes from the upstream quote provider.
    Live,
    /// Randomised fallback data served when live quotes are unavailable.
    Fallback,
    /// Loaded from a local file.
    File,
    #[default]
    Unknown,
}

impl SnapshotSource {
    /// Map the `source` field of the market endpoint response.
    pub fn from_wire(source: Option<&str>) -> Self {
        match source {
            Some("yahoo") | Some("live") => SnapshotSource::Live,
            Some("fallback") => SnapshotSource::Fallback,
            Some("file") => SnapshotSource::File,
            _ => SnapshotSource::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotSource::Live => "live",
            SnapshotSource::Fallback => "fallback",
            SnapshotSource::File => "file",
            SnapshotSource::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered sequence of instrument records (Value Object)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketSnapshot {
    quotes: Vec<StockQuote>,
    source: SnapshotSource,
}

impl MarketSnapshot {
    pub fn new(quotes: Vec<StockQuote>, source: SnapshotSource) -> Self {
        Self { quotes, source }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn quotes(&self) -> &[StockQuote] {
        &self.quotes
    }

    pub fn source(&self) -> SnapshotSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn into_quotes(self) -> Vec<StockQuote> {
        self.quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_uses_endpoint_field_names() {
        let json = r#"{
            "symbol": "TCS",
            "name": "Tata Consultancy Services",
            "sector": "IT",
            "price": 3845.5,
            "change": -0.42,
            "pe": 29.1,
            "marketCap": "13.9L Cr"
        }"#;
        let quote: StockQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.symbol, "TCS");
        assert_eq!(quote.percent_change, -0.42);
        assert_eq!(quote.price_to_earnings, 29.1);
        assert_eq!(quote.market_cap_label, "13.9L Cr");

        let back = serde_json::to_value(&quote).unwrap();
        assert_eq!(back["marketCap"], "13.9L Cr");
        assert_eq!(back["change"], -0.42);
        assert!(back.get("percent_change").is_none());
    }

    #[test]
    fn test_snapshot_source_from_wire() {
        assert_eq!(SnapshotSource::from_wire(Some("yahoo")), SnapshotSource::Live);
        assert_eq!(
            SnapshotSource::from_wire(Some("fallback")),
            SnapshotSource::Fallback
        );
        assert_eq!(SnapshotSource::from_wire(None), SnapshotSource::Unknown);
        assert_eq!(
            SnapshotSource::from_wire(Some("something-else")),
            SnapshotSource::Unknown
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MarketSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert_eq!(snapshot.source(), SnapshotSource::Unknown);
    }
}
