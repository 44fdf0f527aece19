//! Price enrichment
//!
//! Attaches a last known price to each surviving aggregate entry. Lookups
//! are strictly per symbol: a failure yields `None` for that entry and the
//! rest of the batch carries on.

use crate::types::AggregateEntry;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// External collaborator resolving a last price for a symbol.
///
/// `Ok(None)` means the venue does not know the symbol; `Err` means the
/// lookup itself failed. The enricher treats both as "no price".
#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn last_price(&self, symbol: &str) -> Result<Option<f64>>;
}

/// Attach prices to every entry, tolerating per-symbol failures.
///
/// No failure mode here drops an entry or halts enrichment of the rest.
pub async fn enrich(entries: &mut [AggregateEntry], lookup: &dyn PriceLookup) {
    for entry in entries.iter_mut() {
        entry.last_price = match lookup.last_price(&entry.symbol).await {
            Ok(price) => price,
            Err(err) => {
                debug!(symbol = %entry.symbol, error = %err, "price lookup failed");
                None
            }
        };
    }
}

const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Last-price client backed by the Yahoo Finance chart endpoint.
pub struct YahooPriceClient {
    client: reqwest::Client,
    base_url: String,
}

impl YahooPriceClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(YAHOO_CHART_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("wsb-radar/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PriceLookup for YahooPriceClient {
    async fn last_price(&self, symbol: &str) -> Result<Option<f64>> {
        let url = format!("{}/{}?interval=1m&range=1d", self.base_url, symbol);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch quote for {}", symbol))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            bail!("Quote endpoint returned error: {}", response.status());
        }

        let body: serde_json::Value = response
            .json()
            .await
            .with_context(|| format!("Failed to parse quote response for {}", symbol))?;

        // chart.result[0].meta.regularMarketPrice carries the last trade
        let price = body
            .pointer("/chart/result/0/meta/regularMarketPrice")
            .and_then(|v| v.as_f64());

        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentScore;
    use std::collections::HashMap;

    struct FixedPrices {
        prices: HashMap<&'static str, f64>,
        failing: &'static [&'static str],
    }

    #[async_trait]
    impl PriceLookup for FixedPrices {
        async fn last_price(&self, symbol: &str) -> Result<Option<f64>> {
            if self.failing.contains(&symbol) {
                bail!("lookup failed for {}", symbol);
            }
            Ok(self.prices.get(symbol).copied())
        }
    }

    fn entry(symbol: &str) -> AggregateEntry {
        AggregateEntry {
            symbol: symbol.to_string(),
            mentions: 7,
            sentiment: SentimentScore::default(),
            last_price: None,
        }
    }

    #[tokio::test]
    async fn test_enrich_attaches_prices() {
        let lookup = FixedPrices {
            prices: HashMap::from([("GME", 25.0), ("AMC", 4.5)]),
            failing: &[],
        };
        let mut entries = vec![entry("GME"), entry("AMC")];
        enrich(&mut entries, &lookup).await;
        assert_eq!(entries[0].last_price, Some(25.0));
        assert_eq!(entries[1].last_price, Some(4.5));
    }

    #[tokio::test]
    async fn test_one_failure_never_drops_or_halts() {
        let lookup = FixedPrices {
            prices: HashMap::from([("TSLA", 200.0)]),
            failing: &["GME"],
        };
        let mut entries = vec![entry("GME"), entry("TSLA")];
        enrich(&mut entries, &lookup).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].last_price, None);
        assert_eq!(entries[1].last_price, Some(200.0));
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_none_not_error() {
        let lookup = FixedPrices {
            prices: HashMap::new(),
            failing: &[],
        };
        let mut entries = vec![entry("ZZZZ")];
        enrich(&mut entries, &lookup).await;
        assert_eq!(entries[0].last_price, None);
    }

    #[test]
    fn test_parses_chart_meta_price() {
        let body: serde_json::Value = serde_json::json!({
            "chart": { "result": [ { "meta": { "regularMarketPrice": 150.25 } } ] }
        });
        let price = body
            .pointer("/chart/result/0/meta/regularMarketPrice")
            .and_then(|v| v.as_f64());
        assert_eq!(price, Some(150.25));
    }
}
