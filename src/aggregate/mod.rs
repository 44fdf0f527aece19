//! Per-symbol mention and sentiment accumulation
//!
//! One accumulator lives for exactly one batch: it only grows, is mutated
//! solely through [`SentimentAccumulator::merge`], and is consumed at
//! finalization. Merging is commutative and associative per symbol, so the
//! order mentions arrive in never changes the final counts or sums; only
//! first-seen order is recorded, for stable tie-breaking later.

use crate::types::{AggregateEntry, SentimentScore};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct SymbolStats {
    mentions: u64,
    sentiment: SentimentScore,
    /// Insertion index, for first-seen ordering at finalization
    first_seen: usize,
}

/// Map from normalized candidate symbol to its running totals.
#[derive(Debug, Default)]
pub struct SentimentAccumulator {
    stats: HashMap<String, SymbolStats>,
}

impl SentimentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one mention of `symbol` carrying `score`.
    ///
    /// First occurrence creates the entry with mentions = 1; every later
    /// occurrence increments mentions and adds the score elementwise. Each
    /// call is one independent mention, so a text mentioning a symbol twice
    /// merges twice.
    pub fn merge(&mut self, symbol: &str, score: &SentimentScore) {
        match self.stats.get_mut(symbol) {
            Some(entry) => {
                entry.mentions += 1;
                entry.sentiment.add(score);
            }
            None => {
                let first_seen = self.stats.len();
                self.stats.insert(
                    symbol.to_string(),
                    SymbolStats {
                        mentions: 1,
                        sentiment: *score,
                        first_seen,
                    },
                );
            }
        }
    }

    /// Number of distinct symbols seen so far.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Mention count for one symbol, if seen.
    pub fn mentions(&self, symbol: &str) -> Option<u64> {
        self.stats.get(symbol).map(|s| s.mentions)
    }

    /// Consume the accumulator, yielding one entry per symbol in first-seen
    /// order, prices unattached.
    pub fn into_entries(self) -> Vec<AggregateEntry> {
        let mut stats: Vec<(String, SymbolStats)> = self.stats.into_iter().collect();
        stats.sort_by_key(|(_, s)| s.first_seen);
        stats
            .into_iter()
            .map(|(symbol, s)| AggregateEntry {
                symbol,
                mentions: s.mentions,
                sentiment: s.sentiment,
                last_price: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(c: f64) -> SentimentScore {
        SentimentScore {
            compound: c,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_merge_creates_entry() {
        let mut acc = SentimentAccumulator::new();
        acc.merge("GME", &compound(0.5));
        assert_eq!(acc.mentions("GME"), Some(1));
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_sums_not_averages() {
        let mut acc = SentimentAccumulator::new();
        acc.merge("AAPL", &compound(0.6));
        acc.merge("AAPL", &compound(-0.6));
        let entries = acc.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mentions, 2);
        assert!((entries[0].sentiment.compound - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_is_commutative() {
        let pairs = [
            ("GME", 0.7),
            ("AMC", -0.2),
            ("GME", 0.1),
            ("BB", 0.0),
            ("GME", -0.4),
            ("AMC", 0.9),
        ];

        let mut forward = SentimentAccumulator::new();
        for (sym, c) in pairs {
            forward.merge(sym, &compound(c));
        }
        let mut reversed = SentimentAccumulator::new();
        for (sym, c) in pairs.iter().rev() {
            reversed.merge(sym, &compound(*c));
        }

        for sym in ["GME", "AMC", "BB"] {
            assert_eq!(forward.mentions(sym), reversed.mentions(sym));
        }
        let f: Vec<_> = forward.into_entries();
        let r: Vec<_> = reversed.into_entries();
        for sym in ["GME", "AMC", "BB"] {
            let fe = f.iter().find(|e| e.symbol == sym).unwrap();
            let re = r.iter().find(|e| e.symbol == sym).unwrap();
            assert!((fe.sentiment.compound - re.sentiment.compound).abs() < 1e-9);
        }
    }

    #[test]
    fn test_all_components_accumulate() {
        let mut acc = SentimentAccumulator::new();
        let s = SentimentScore {
            negative: 0.1,
            neutral: 0.5,
            positive: 0.4,
            compound: 0.3,
        };
        acc.merge("TSLA", &s);
        acc.merge("TSLA", &s);
        let entries = acc.into_entries();
        assert!((entries[0].sentiment.negative - 0.2).abs() < 1e-9);
        assert!((entries[0].sentiment.neutral - 1.0).abs() < 1e-9);
        assert!((entries[0].sentiment.positive - 0.8).abs() < 1e-9);
        assert!((entries[0].sentiment.compound - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_into_entries_first_seen_order() {
        let mut acc = SentimentAccumulator::new();
        for sym in ["GME", "AMC", "BB", "AMC", "GME"] {
            acc.merge(sym, &compound(0.0));
        }
        let order: Vec<_> = acc.into_entries().into_iter().map(|e| e.symbol).collect();
        assert_eq!(order, vec!["GME", "AMC", "BB"]);
    }
}
