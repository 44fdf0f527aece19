//! Noise suppression for extracted candidates
//!
//! Cashtag extraction over social text produces plenty of false positives:
//! common words, trading slang and abbreviations that happen to be 2-4
//! uppercase letters. A static deny-list plus a minimum-mentions threshold
//! is the cheap, deterministic precision filter used here instead of real
//! named-entity recognition.

mod denylist;

use crate::types::AggregateEntry;
use std::collections::HashSet;

pub use denylist::DENY_LIST;

/// Minimum-mentions threshold: entries survive only with strictly more
/// mentions than this.
pub const DEFAULT_MIN_MENTIONS: u64 = 5;

/// Decides which aggregate entries are genuine tickers worth reporting.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    denied: HashSet<&'static str>,
    min_mentions: u64,
}

impl NoiseFilter {
    /// Filter with the built-in deny-list and the given threshold.
    pub fn with_threshold(min_mentions: u64) -> Self {
        Self {
            denied: DENY_LIST.iter().copied().collect(),
            min_mentions,
        }
    }

    pub fn min_mentions(&self) -> u64 {
        self.min_mentions
    }

    /// True when the entry should be dropped: deny-listed, or not mentioned
    /// strictly more than the threshold.
    pub fn is_noise(&self, symbol: &str, mentions: u64) -> bool {
        self.denied.contains(symbol) || mentions <= self.min_mentions
    }

    /// Drop every noise entry in place, preserving the order of survivors.
    pub fn retain(&self, entries: &mut Vec<AggregateEntry>) {
        entries.retain(|e| !self.is_noise(&e.symbol, e.mentions));
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_MIN_MENTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AggregateEntry, SentimentScore};

    fn entry(symbol: &str, mentions: u64) -> AggregateEntry {
        AggregateEntry {
            symbol: symbol.to_string(),
            mentions,
            sentiment: SentimentScore::default(),
            last_price: None,
        }
    }

    #[test]
    fn test_denied_symbol_dropped_regardless_of_volume() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise("YOLO", 10_000));
        assert!(filter.is_noise("THE", 10_000));
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise("GME", 5));
        assert!(!filter.is_noise("GME", 6));
    }

    #[test]
    fn test_retain_drops_silently_and_keeps_order() {
        let filter = NoiseFilter::default();
        let mut entries = vec![
            entry("GME", 12),
            entry("YOLO", 40),
            entry("AMC", 5),
            entry("TSLA", 7),
        ];
        filter.retain(&mut entries);
        let symbols: Vec<_> = entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["GME", "TSLA"]);
    }

    #[test]
    fn test_zero_threshold_keeps_single_mentions() {
        let filter = NoiseFilter::with_threshold(0);
        assert!(!filter.is_noise("GME", 1));
        assert!(filter.is_noise("YOLO", 1));
    }

    #[test]
    fn test_deny_list_is_nonempty_uppercase() {
        assert!(DENY_LIST.len() > 300);
        for w in DENY_LIST {
            assert_eq!(*w, w.to_uppercase());
        }
    }
}
