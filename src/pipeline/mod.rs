//! Batch orchestrator
//!
//! Drives one pass over a batch of posts: extraction and scoring per text
//! item, merge into the accumulator, then noise filtering, price
//! enrichment and ranking. All state lives for one call to
//! [`MentionPipeline::run`] and is discarded afterwards.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::aggregate::SentimentAccumulator;
use crate::extract;
use crate::filter::NoiseFilter;
use crate::pricing::{self, PriceLookup};
use crate::reddit::ContentSource;
use crate::sentiment::SentimentScorer;
use crate::types::{AnalysisReport, Topic};

/// Extraction, aggregation, filtering and ranking over one batch of posts.
pub struct MentionPipeline {
    source: Arc<dyn ContentSource>,
    scorer: Arc<dyn SentimentScorer>,
    prices: Arc<dyn PriceLookup>,
    filter: NoiseFilter,
    post_limit: usize,
}

impl MentionPipeline {
    pub fn new(
        source: Arc<dyn ContentSource>,
        scorer: Arc<dyn SentimentScorer>,
        prices: Arc<dyn PriceLookup>,
        filter: NoiseFilter,
        post_limit: usize,
    ) -> Self {
        Self {
            source,
            scorer,
            prices,
            filter,
            post_limit,
        }
    }

    /// Run one batch end to end.
    ///
    /// A wholesale source failure degrades to an empty report rather than
    /// surfacing as an error; every narrower failure is handled at the item
    /// or symbol it concerns.
    pub async fn run(&self) -> AnalysisReport {
        let posts = match self.source.fetch_hot_posts(self.post_limit).await {
            Ok(posts) => posts,
            Err(err) => {
                warn!(error = %err, "content source unavailable, reporting no data");
                return AnalysisReport::default();
            }
        };

        let mut accumulator = SentimentAccumulator::new();
        let mut topics = Vec::with_capacity(posts.len());
        let mut items = 0usize;

        for post in &posts {
            topics.push(Topic {
                title: post.title.clone(),
                url: post.url.clone(),
            });

            for text in std::iter::once(post.text.as_str())
                .chain(post.comments.iter().map(|c| c.text.as_str()))
            {
                if text.trim().is_empty() {
                    continue;
                }
                items += 1;

                // One score per item; every candidate from the item gets
                // that same score merged in.
                let score = match self.scorer.score(text) {
                    Ok(score) => score,
                    Err(err) => {
                        warn!(error = %err, "scoring failed, skipping item");
                        continue;
                    }
                };
                for candidate in extract::candidates(text) {
                    accumulator.merge(&candidate, &score);
                }
            }
        }

        debug!(
            posts = posts.len(),
            items,
            symbols = accumulator.len(),
            "batch accumulated"
        );

        let mut ranked = accumulator.into_entries();
        self.filter.retain(&mut ranked);
        pricing::enrich(&mut ranked, &*self.prices).await;
        // Stable sort over first-seen order: ties stay in extraction order
        ranked.sort_by(|a, b| b.mentions.cmp(&a.mentions));

        info!(
            survivors = ranked.len(),
            topics = topics.len(),
            "batch finalized"
        );
        AnalysisReport { ranked, topics }
    }
}
