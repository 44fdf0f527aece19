//! wsb-radar Library
//!
//! Ticker-mention analysis over r/wallstreetbets: cashtag extraction,
//! per-symbol sentiment aggregation, noise filtering and price-enriched
//! ranking.

pub mod aggregate;
pub mod config;
pub mod extract;
pub mod filter;
pub mod persistence;
pub mod pipeline;
pub mod pricing;
pub mod reddit;
pub mod sentiment;
pub mod types;
