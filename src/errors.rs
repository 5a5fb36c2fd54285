use thiserror::Error;

use crate::domain::InsightKind;

/// Error type that captures report rendering and dispatch failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Insight request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Insight API returned status {status} for {kind} categories")]
    Api { kind: InsightKind, status: u16 },
    #[error("Invalid navigation token: {0}")]
    InvalidToken(String),
    #[error("Invalid report period: {0}")]
    InvalidPeriod(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Presentation error: {0}")]
    Presentation(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
