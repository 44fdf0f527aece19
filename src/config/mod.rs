//! Configuration management for wsb-radar
//!
//! Loads from YAML files + environment variables via .env

mod types;

pub use types::*;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub bot: BotConfig,
    pub reddit: RedditConfig,
    pub filter: FilterConfig,
    pub persistence: PersistenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Version tag for logging and CSV
    pub tag: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditConfig {
    /// OAuth client id (usually via REDDIT_CLIENT_ID)
    pub client_id: String,
    /// OAuth client secret (usually via REDDIT_CLIENT_SECRET)
    pub client_secret: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Subreddit to scan
    pub subreddit: String,
    /// Hot posts fetched per batch
    pub post_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Entries survive only with strictly more mentions than this
    pub min_mentions: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Data directory
    pub data_dir: String,
    /// Enable CSV export of the ranked table
    pub csv_enabled: bool,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("bot.tag", env!("CARGO_PKG_VERSION"))?
            // Reddit defaults
            .set_default("reddit.client_id", "")?
            .set_default("reddit.client_secret", "")?
            .set_default(
                "reddit.user_agent",
                concat!("wsb-radar/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("reddit.subreddit", "wallstreetbets")?
            .set_default("reddit.post_limit", 20)?
            // Filter defaults
            .set_default("filter.min_mentions", 5)?
            // Persistence defaults
            .set_default("persistence.data_dir", "./data")?
            .set_default("persistence.csv_enabled", true)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (WSBRADAR_*)
            .add_source(Environment::with_prefix("WSBRADAR").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Bare env vars win over empty config values, matching how the
        // credentials are usually provisioned
        if app_config.reddit.client_id.is_empty() {
            if let Ok(id) = std::env::var("REDDIT_CLIENT_ID") {
                app_config.reddit.client_id = id;
            }
        }
        if app_config.reddit.client_secret.is_empty() {
            if let Ok(secret) = std::env::var("REDDIT_CLIENT_SECRET") {
                app_config.reddit.client_secret = secret;
            }
        }

        Ok(app_config)
    }

    /// Generate a digest of the config (without secrets) for logging
    pub fn digest(&self) -> String {
        format!(
            "tag={} subreddit={} post_limit={} min_mentions={} csv={}",
            self.bot.tag,
            self.reddit.subreddit,
            self.reddit.post_limit,
            self.filter.min_mentions,
            self.persistence.csv_enabled
        )
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest())
    }
}
