// File: src/training.rs
use crate::config::TrainConfig;
use crate::core::engine::TextPipeline;
use crate::core::types::Label;
use crate::dataset::{resolve_seed, DatasetBuilder};
use crate::error::Result;
use crate::learning::{evaluate, ConfusionMatrix, NaiveBayesModel, NaiveBayesTrainer};
use crate::persistence::{save_model, ModelFormat};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of one training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    /// Held-out accuracy, the headline number.
    pub accuracy: f64,
    /// Accuracy on the examples the model was fitted on.
    pub train_accuracy: f64,
    pub confusion: ConfusionMatrix,
    pub train_size: usize,
    pub test_size: usize,
    pub positive_examples: usize,
    pub negative_examples: usize,
    pub seed: u64,
    pub vocabulary: usize,
    pub model_path: PathBuf,
    pub format: ModelFormat,
}

/// A fitted and evaluated model that has not been written yet.
#[derive(Debug, Clone)]
pub struct TrainingRun {
    pub model: NaiveBayesModel,
    pub report: TrainingReport,
}

impl TrainingRun {
    pub fn save(&self) -> Result<()> {
        save_model(&self.model, &self.report.model_path, self.report.format)
    }
}

/// Reads the corpora, splits, fits and evaluates. Nothing touches the disk
/// besides the reads.
pub fn train(config: &TrainConfig) -> Result<TrainingRun> {
    config.validate()?;
    let pipeline = TextPipeline::load(
        &config.language,
        config.assets_dir.as_deref(),
        config.normalizer_options(),
    )?;

    let mut builder = DatasetBuilder::new(&pipeline);
    for source in &config.corpora {
        let examples = source.read(&config.columns)?;
        debug!(path = %source.path.display(), examples = examples.len(), "featurizing corpus");
        builder.add_examples(&examples);
    }
    let dataset = builder.build();
    let positive_examples = dataset.count(Label::Positive);
    let negative_examples = dataset.count(Label::Negative);
    info!(
        examples = dataset.len(),
        positive = positive_examples,
        negative = negative_examples,
        "built dataset"
    );

    let split = dataset.shuffle_split(config.train_ratio, resolve_seed(config.seed))?;
    let model = NaiveBayesTrainer::new()
        .with_smoothing(config.smoothing)
        .fit(&split.train)?;

    let evaluation = evaluate(&model, &split.test)?;
    let train_accuracy = evaluate(&model, &split.train)?.accuracy;
    info!(
        accuracy = evaluation.accuracy,
        train_accuracy,
        seed = split.seed,
        "evaluated model"
    );

    let report = TrainingReport {
        accuracy: evaluation.accuracy,
        train_accuracy,
        confusion: evaluation.confusion,
        train_size: split.train.len(),
        test_size: split.test.len(),
        positive_examples,
        negative_examples,
        seed: split.seed,
        vocabulary: model.vocabulary_len(),
        model_path: config.model_path.clone(),
        format: config.model_format(),
    };
    Ok(TrainingRun { model, report })
}

/// [`train`], then persist the model to the configured path.
pub fn run(config: &TrainConfig) -> Result<TrainingReport> {
    let run = train(config)?;
    run.save()?;
    Ok(run.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusSource;
    use crate::error::Error;
    use std::fs;

    #[test]
    fn single_label_corpus_cannot_train() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pos.txt");
        fs::write(&path, "good\ngreat\nlovely day\nfun times\nnice\n").unwrap();

        let config = TrainConfig::default()
            .with_corpus(CorpusSource::positive(&path))
            .with_seed(3)
            .with_model_path(dir.path().join("m.bin"));
        let err = run(&config).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { split: "train", .. }));
        assert!(!dir.path().join("m.bin").exists());
    }

    #[test]
    fn invalid_config_fails_before_reading() {
        let config = TrainConfig::default()
            .with_corpus(CorpusSource::positive("/missing.json"))
            .with_train_ratio(2.0);
        assert!(matches!(train(&config), Err(Error::InvalidConfig(_))));
    }
}
