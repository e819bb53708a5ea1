// File: src/config.rs
use crate::core::normalizer::NormalizerOptions;
use crate::corpus::{CorpusColumns, CorpusSource};
use crate::dataset::DEFAULT_TRAIN_RATIO;
use crate::error::{Error, Result};
use crate::learning::naive_bayes::DEFAULT_SMOOTHING;
use crate::persistence::ModelFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a training run needs. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub language: String,
    /// Directory with stop-word, lexicon and lemma files. Built-in English
    /// tables are used when unset.
    pub assets_dir: Option<PathBuf>,
    pub strip_non_alphanumeric: bool,
    pub lowercase: bool,
    pub train_ratio: f64,
    /// Shuffle seed. A random one is drawn (and reported) when unset.
    pub seed: Option<u64>,
    pub smoothing: f64,
    pub corpora: Vec<CorpusSource>,
    pub columns: CorpusColumns,
    pub model_path: PathBuf,
    /// Derived from `model_path` when unset.
    pub format: Option<ModelFormat>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            assets_dir: None,
            strip_non_alphanumeric: false,
            lowercase: false,
            train_ratio: DEFAULT_TRAIN_RATIO,
            seed: None,
            smoothing: DEFAULT_SMOOTHING,
            corpora: Vec::new(),
            columns: CorpusColumns::default(),
            model_path: PathBuf::from("classifier.bin"),
            format: None,
        }
    }
}

impl TrainConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))
    }

    pub fn with_corpus(mut self, source: CorpusSource) -> Self {
        self.corpora.push(source);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    pub fn with_train_ratio(mut self, ratio: f64) -> Self {
        self.train_ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_format(mut self, format: ModelFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_normalizer_options(mut self, options: NormalizerOptions) -> Self {
        self.strip_non_alphanumeric = options.strip_non_alphanumeric;
        self.lowercase = options.lowercase;
        self
    }

    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            strip_non_alphanumeric: self.strip_non_alphanumeric,
            lowercase: self.lowercase,
        }
    }

    pub fn model_format(&self) -> ModelFormat {
        self.format
            .unwrap_or_else(|| ModelFormat::from_path(&self.model_path))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.train_ratio > 0.0 && self.train_ratio < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "train_ratio must be in (0, 1), got {}",
                self.train_ratio
            )));
        }
        if !(self.smoothing.is_finite() && self.smoothing > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "smoothing must be positive, got {}",
                self.smoothing
            )));
        }
        if self.corpora.is_empty() {
            return Err(Error::InvalidConfig("no corpora configured".to_string()));
        }
        if self.language.trim().is_empty() {
            return Err(Error::InvalidConfig("language is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Label;

    #[test]
    fn defaults_need_corpora() {
        let config = TrainConfig::default();
        assert_eq!(config.train_ratio, 0.8);
        assert_eq!(config.smoothing, 0.5);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(config.with_corpus(CorpusSource::positive("pos.json")).validate().is_ok());
    }

    #[test]
    fn rejects_bad_numbers() {
        let base = TrainConfig::default().with_corpus(CorpusSource::labeled("all.csv"));
        assert!(base.clone().with_train_ratio(1.0).validate().is_err());
        assert!(base.clone().with_train_ratio(-0.2).validate().is_err());
        assert!(base.clone().with_smoothing(0.0).validate().is_err());
        assert!(base.with_smoothing(f64::NAN).validate().is_err());
    }

    #[test]
    fn format_follows_model_path() {
        let config = TrainConfig::default().with_model_path("out/model.json");
        assert_eq!(config.model_format(), ModelFormat::Json);
        assert_eq!(config.with_format(ModelFormat::Bincode).model_format(), ModelFormat::Bincode);
    }

    #[test]
    fn partial_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.json");
        fs::write(
            &path,
            r#"{
                "seed": 11,
                "lowercase": true,
                "corpora": [
                    {"path": "positive_tweets.json", "label": "positive"},
                    {"path": "dump.csv", "label": null}
                ],
                "columns": {"text": "title"},
                "format": "json"
            }"#,
        )
        .unwrap();

        let config = TrainConfig::from_file(&path).unwrap();
        assert_eq!(config.seed, Some(11));
        assert!(config.normalizer_options().lowercase);
        assert!(!config.normalizer_options().strip_non_alphanumeric);
        assert_eq!(config.corpora[0].label, Some(Label::Positive));
        assert_eq!(config.corpora[1].label, None);
        assert_eq!(config.columns.text, "title");
        assert_eq!(config.columns.label, "label");
        assert_eq!(config.model_format(), ModelFormat::Json);
        assert_eq!(config.language, "english");
    }

    #[test]
    fn unparsable_file_is_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.json");
        fs::write(&path, "{ seed: ").unwrap();
        assert!(matches!(TrainConfig::from_file(&path), Err(Error::InvalidConfig(_))));
    }
}
