//! Configuration types and re-exports

pub use super::{AppConfig, BotConfig, FilterConfig, PersistenceConfig, RedditConfig};
