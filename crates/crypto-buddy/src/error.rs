//! Error Types for CryptoBuddy

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuddyError>;

#[derive(Error, Debug)]
pub enum BuddyError {
    #[error("Invalid category for {entity}: {field} = '{value}'")]
    InvalidCategory {
        entity: String,
        field: &'static str,
        value: String,
    },

    #[error("Sustainability score out of range for {entity}: {score} (expected 0-10)")]
    ScoreOutOfRange { entity: String, score: Decimal },

    #[error("Duplicate entity in dataset: {0}")]
    DuplicateEntity(String),

    #[error("Dataset contains no entities")]
    EmptyDataset,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuddyError {
    /// Whether this error comes from a malformed dataset or configuration,
    /// i.e. something that should stop the process at startup.
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCategory { .. }
                | Self::ScoreOutOfRange { .. }
                | Self::DuplicateEntity(_)
                | Self::EmptyDataset
                | Self::Config(_)
                | Self::Dataset(_)
        )
    }
}
