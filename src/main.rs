//! wsb-radar binary
//!
//! Wires config, the Reddit source, the VADER scorer and the Yahoo price
//! client into one pipeline run, logs the result and optionally exports it
//! as CSV.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wsb_radar::config::AppConfig;
use wsb_radar::filter::NoiseFilter;
use wsb_radar::persistence::ReportWriter;
use wsb_radar::pipeline::MentionPipeline;
use wsb_radar::pricing::YahooPriceClient;
use wsb_radar::reddit::RedditClient;
use wsb_radar::sentiment::VaderScorer;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    info!(config = %config.digest(), "🚀 wsb-radar starting");

    let source = Arc::new(RedditClient::new(&config.reddit)?);
    let scorer = Arc::new(VaderScorer::new());
    let prices = Arc::new(YahooPriceClient::new()?);
    let filter = NoiseFilter::with_threshold(config.filter.min_mentions);

    let pipeline = MentionPipeline::new(
        source,
        scorer,
        prices,
        filter,
        config.reddit.post_limit,
    );
    let report = pipeline.run().await;

    for topic in &report.topics {
        info!(title = %topic.title, url = %topic.url, "topic");
    }
    for entry in &report.ranked {
        info!("{}", entry);
    }
    if report.is_empty() {
        info!("no data this batch");
    }

    if config.persistence.csv_enabled && !report.ranked.is_empty() {
        let writer = ReportWriter::new(&config.persistence.data_dir);
        writer.write_ranked(&report)?;
    }

    Ok(())
}
