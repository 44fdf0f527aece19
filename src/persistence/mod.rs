//! CSV export of analysis reports
//!
//! Writes the ranked mention table to a timestamped CSV under the data
//! directory, one row per surviving symbol.

use anyhow::{Context, Result};
use chrono::Utc;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::types::AnalysisReport;

/// One exported row of the ranked table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRecord {
    pub symbol: String,
    pub mentions: u64,
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
    pub last_price: Option<f64>,
}

/// Writes reports into a data directory.
pub struct ReportWriter {
    data_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Write the ranked table as `mentions_<utc-timestamp>.csv` and return
    /// the path.
    pub fn write_ranked(&self, report: &AnalysisReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;

        let filename = format!("mentions_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));
        let path = self.data_dir.join(filename);

        let mut writer = WriterBuilder::new()
            .has_headers(true)
            .from_path(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        for entry in &report.ranked {
            writer.serialize(RankedRecord {
                symbol: entry.symbol.clone(),
                mentions: entry.mentions,
                negative: entry.sentiment.negative,
                neutral: entry.sentiment.neutral,
                positive: entry.sentiment.positive,
                compound: entry.sentiment.compound,
                last_price: entry.last_price,
            })?;
        }
        writer.flush().context("Failed to flush CSV")?;

        info!(path = %path.display(), rows = report.ranked.len(), "ranked table exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AggregateEntry, SentimentScore};

    #[test]
    fn test_writes_one_row_per_entry() {
        let dir = std::env::temp_dir().join("wsb-radar-test-export");
        let writer = ReportWriter::new(&dir);
        let report = AnalysisReport {
            ranked: vec![
                AggregateEntry {
                    symbol: "GME".to_string(),
                    mentions: 12,
                    sentiment: SentimentScore {
                        negative: 0.4,
                        neutral: 6.0,
                        positive: 2.1,
                        compound: 1.3,
                    },
                    last_price: Some(25.0),
                },
                AggregateEntry {
                    symbol: "AMC".to_string(),
                    mentions: 7,
                    sentiment: SentimentScore::default(),
                    last_price: None,
                },
            ],
            topics: Vec::new(),
        };

        let path = writer.write_ranked(&report).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[1].starts_with("GME,12,"));
        assert!(lines[2].starts_with("AMC,7,"));
        fs::remove_file(path).ok();
    }
}
