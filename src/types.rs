//! Core types used throughout wsb-radar
//!
//! Defines the data structures shared by the extraction, aggregation,
//! filtering and enrichment stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-component sentiment score as produced by a VADER-style scorer.
///
/// `negative`, `neutral` and `positive` lie in `[0, 1]` and sum to ~1 for a
/// single scored text; `compound` lies in `[-1, 1]`. Once inside an
/// [`AggregateEntry`] the components are elementwise sums over every
/// occurrence, not averages, so they leave those ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl SentimentScore {
    /// Add another score elementwise into this one.
    pub fn add(&mut self, other: &SentimentScore) {
        self.negative += other.negative;
        self.neutral += other.neutral;
        self.positive += other.positive;
        self.compound += other.compound;
    }
}

/// Running aggregate for one ticker candidate.
///
/// Created on first extraction, updated on every later occurrence, and
/// finalized exactly once when a price is attached after the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateEntry {
    /// Normalized candidate symbol (uppercase, no sigil)
    pub symbol: String,
    /// Number of extraction events for this symbol across the batch
    pub mentions: u64,
    /// Elementwise sums of every occurrence's sentiment score
    pub sentiment: SentimentScore,
    /// Last known price, if the lookup succeeded
    pub last_price: Option<f64>,
}

impl fmt::Display for AggregateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} compound={:.3}",
            self.symbol, self.mentions, self.sentiment.compound
        )?;
        match self.last_price {
            Some(price) => write!(f, " last={:.2}", price),
            None => write!(f, " last=?"),
        }
    }
}

/// One source post, collected for display independently of aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub url: String,
}

/// Result of one pipeline batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Surviving entries, descending by mentions (ties: first seen first)
    pub ranked: Vec<AggregateEntry>,
    /// One topic per source post, in source order, no dedup
    pub topics: Vec<Topic>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty() && self.topics.is_empty()
    }
}
