//! Sentiment scoring
//!
//! The pipeline asks for one score per text item and applies that same
//! score to every candidate extracted from the item. The production scorer
//! is VADER, which is tuned for exactly this kind of social-media text.

use crate::types::SentimentScore;
use anyhow::Result;
use vader_sentiment::SentimentIntensityAnalyzer;

/// External collaborator that scores a text string.
pub trait SentimentScorer: Send + Sync {
    /// Score one text item. A failure here makes the pipeline skip the
    /// item; it never aborts the batch.
    fn score(&self, text: &str) -> Result<SentimentScore>;
}

/// VADER polarity scorer.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        let scores = self.analyzer.polarity_scores(text.trim());
        Ok(SentimentScore {
            negative: scores.get("neg").copied().unwrap_or(0.0),
            neutral: scores.get("neu").copied().unwrap_or(0.0),
            positive: scores.get("pos").copied().unwrap_or(0.0),
            compound: scores.get("compound").copied().unwrap_or(0.0),
        })
    }
}
