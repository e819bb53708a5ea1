//! Error types for the sentiment trainer

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a training run, a classification or a model load can hit.
#[derive(Error, Debug)]
pub enum Error {
    /// Language assets missing or unloadable. Fatal for the whole pipeline.
    #[error("Language resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Empty or single-class data where a split needs both labels
    #[error("Insufficient data in {split} split: {reason}")]
    InsufficientData { split: &'static str, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A model file that could not be decoded
    #[error("Corrupt model: {0}")]
    CorruptModel(String),

    /// A corpus record that could not be read
    #[error("Invalid corpus {path}: {reason}")]
    InvalidCorpus { path: String, reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn insufficient(split: &'static str, reason: impl Into<String>) -> Self {
        Error::InsufficientData {
            split,
            reason: reason.into(),
        }
    }

    pub(crate) fn corpus(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidCorpus {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
