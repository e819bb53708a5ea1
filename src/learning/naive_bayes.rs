// File: src/learning/naive_bayes.rs
//! Presence-based (Bernoulli) Naive Bayes over [`FeatureMap`]s.
//!
//! Fitting estimates, per label, the prior and for every feature seen in
//! training the probability that the feature is present. Scoring adds the
//! log prior and, for every known feature, the log probability of its
//! observed state (present or absent). Features never seen in training carry
//! no information and are skipped.

use crate::core::types::{FeatureMap, Label, LabeledFeatureMap};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Expected likelihood estimation: add one half to every outcome count.
pub const DEFAULT_SMOOTHING: f64 = 0.5;

/// Untrained classifier. Holds the smoothing constant only; every call to
/// [`fit`](NaiveBayesTrainer::fit) builds a new model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaiveBayesTrainer {
    smoothing: f64,
}

impl Default for NaiveBayesTrainer {
    fn default() -> Self {
        Self::new()
    }
}

impl NaiveBayesTrainer {
    pub fn new() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn fit(&self, train: &[LabeledFeatureMap]) -> Result<NaiveBayesModel> {
        if !(self.smoothing.is_finite() && self.smoothing > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "smoothing must be a positive number, got {}",
                self.smoothing
            )));
        }
        if train.is_empty() {
            return Err(Error::insufficient("train", "no examples"));
        }

        let mut label_counts = [0usize; 2];
        let mut feature_counts: BTreeMap<&str, [usize; 2]> = BTreeMap::new();
        for example in train {
            let l = example.label.index();
            label_counts[l] += 1;
            for feature in example.features.present() {
                feature_counts.entry(feature).or_default()[l] += 1;
            }
        }

        for label in Label::ALL {
            if label_counts[label.index()] == 0 {
                return Err(Error::insufficient(
                    "train",
                    format!("no {} examples; both labels are required", label),
                ));
            }
        }

        let total = train.len() as f64;
        let priors = label_counts.map(|c| c as f64 / total);
        let gamma = self.smoothing;
        let features: BTreeMap<String, [f64; 2]> = feature_counts
            .into_iter()
            .map(|(name, counts)| {
                let present = [0, 1].map(|l| {
                    (counts[l] as f64 + gamma) / (label_counts[l] as f64 + 2.0 * gamma)
                });
                (name.to_string(), present)
            })
            .collect();

        let model = NaiveBayesModel::from_tables(ModelTables {
            priors,
            features,
            smoothing: gamma,
            training_examples: train.len(),
        });
        info!(
            examples = train.len(),
            positive = label_counts[Label::Positive.index()],
            negative = label_counts[Label::Negative.index()],
            vocabulary = model.vocabulary_len(),
            "fitted naive bayes model"
        );
        Ok(model)
    }
}

/// Serialized form of a [`NaiveBayesModel`]. Everything else is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTables {
    /// P(label), indexed by [`Label::index`]
    priors: [f64; 2],
    /// P(present | label) for every feature seen in training
    features: BTreeMap<String, [f64; 2]>,
    smoothing: f64,
    training_examples: usize,
}

impl ModelTables {
    fn validate(&self) -> std::result::Result<(), String> {
        let open_unit = |p: f64| p > 0.0 && p < 1.0;
        if !self.priors.iter().all(|&p| open_unit(p)) {
            return Err(format!("priors out of range: {:?}", self.priors));
        }
        if (self.priors.iter().sum::<f64>() - 1.0).abs() > 1e-9 {
            return Err(format!("priors do not sum to one: {:?}", self.priors));
        }
        if !(self.smoothing.is_finite() && self.smoothing > 0.0) {
            return Err(format!("invalid smoothing {}", self.smoothing));
        }
        if let Some((name, _)) = self
            .features
            .iter()
            .find(|(_, probs)| !probs.iter().all(|&p| open_unit(p)))
        {
            return Err(format!("probability out of range for feature '{}'", name));
        }
        Ok(())
    }
}

/// A fitted classifier. Immutable; refitting builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelTables", into = "ModelTables")]
pub struct NaiveBayesModel {
    tables: ModelTables,
    /// Per label, sum of log P(absent | label) over every known feature.
    absent_log_sum: [f64; 2],
}

impl TryFrom<ModelTables> for NaiveBayesModel {
    type Error = String;

    fn try_from(tables: ModelTables) -> std::result::Result<Self, Self::Error> {
        tables.validate()?;
        Ok(Self::from_tables(tables))
    }
}

impl From<NaiveBayesModel> for ModelTables {
    fn from(model: NaiveBayesModel) -> Self {
        model.tables
    }
}

/// Outcome of [`NaiveBayesModel::predict`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Posterior probability of `label`
    pub score: f64,
}

/// Posterior probability of each label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    pub negative: f64,
    pub positive: f64,
}

impl Distribution {
    pub fn prob(&self, label: Label) -> f64 {
        match label {
            Label::Negative => self.negative,
            Label::Positive => self.positive,
        }
    }
}

/// A feature whose presence strongly favours one label.
#[derive(Debug, Clone, PartialEq)]
pub struct InformativeFeature {
    pub name: String,
    pub favours: Label,
    /// P(present | favoured) / P(present | other)
    pub ratio: f64,
}

impl NaiveBayesModel {
    fn from_tables(tables: ModelTables) -> Self {
        let mut absent_log_sum = [0.0; 2];
        for probs in tables.features.values() {
            for l in 0..2 {
                absent_log_sum[l] += (1.0 - probs[l]).ln();
            }
        }
        Self {
            tables,
            absent_log_sum,
        }
    }

    pub fn prior(&self, label: Label) -> f64 {
        self.tables.priors[label.index()]
    }

    /// P(present | label) for a feature seen in training.
    pub fn presence_probability(&self, feature: &str, label: Label) -> Option<f64> {
        self.tables.features.get(feature).map(|p| p[label.index()])
    }

    pub fn vocabulary_len(&self) -> usize {
        self.tables.features.len()
    }

    pub fn smoothing(&self) -> f64 {
        self.tables.smoothing
    }

    pub fn training_examples(&self) -> usize {
        self.tables.training_examples
    }

    /// Unnormalised log joint probability per label, indexed by [`Label::index`].
    pub fn log_scores(&self, features: &FeatureMap) -> [f64; 2] {
        let mut scores = [0.0; 2];
        for label in Label::ALL {
            let l = label.index();
            // start from "every known feature absent", then flip the present ones
            let mut score = self.tables.priors[l].ln() + self.absent_log_sum[l];
            for name in features.present() {
                if let Some(probs) = self.tables.features.get(name) {
                    score += probs[l].ln() - (1.0 - probs[l]).ln();
                }
            }
            scores[l] = score;
        }
        scores
    }

    pub fn prob_classify(&self, features: &FeatureMap) -> Distribution {
        let [neg, pos] = self.log_scores(features);
        let max = neg.max(pos);
        let (e_neg, e_pos) = ((neg - max).exp(), (pos - max).exp());
        let total = e_neg + e_pos;
        Distribution {
            negative: e_neg / total,
            positive: e_pos / total,
        }
    }

    /// Maximum a posteriori label. Ties go to [`Label::Positive`].
    pub fn predict(&self, features: &FeatureMap) -> Prediction {
        let scores = self.log_scores(features);
        let label = if scores[Label::Positive.index()] >= scores[Label::Negative.index()] {
            Label::Positive
        } else {
            Label::Negative
        };
        let margin = scores[label.other().index()] - scores[label.index()];
        Prediction {
            label,
            score: 1.0 / (1.0 + margin.exp()),
        }
    }

    /// The `n` features whose presence separates the labels most, strongest first.
    pub fn most_informative_features(&self, n: usize) -> Vec<InformativeFeature> {
        let mut ranked: Vec<InformativeFeature> = self
            .tables
            .features
            .iter()
            .map(|(name, probs)| {
                let (favours, ratio) = if probs[Label::Positive.index()] >= probs[Label::Negative.index()] {
                    (Label::Positive, probs[1] / probs[0])
                } else {
                    (Label::Negative, probs[0] / probs[1])
                };
                InformativeFeature {
                    name: name.clone(),
                    favours,
                    ratio,
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.ratio.total_cmp(&a.ratio).then_with(|| a.name.cmp(&b.name)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(words: &[&str], label: Label) -> LabeledFeatureMap {
        LabeledFeatureMap {
            features: words.iter().map(|w| (*w, true)).collect(),
            label,
        }
    }

    fn features(words: &[&str]) -> FeatureMap {
        words.iter().map(|w| (*w, true)).collect()
    }

    fn separable() -> Vec<LabeledFeatureMap> {
        vec![
            example(&["good"], Label::Positive),
            example(&["good"], Label::Positive),
            example(&["bad"], Label::Negative),
            example(&["bad"], Label::Negative),
        ]
    }

    #[test]
    fn separable_data_is_predicted() {
        let model = NaiveBayesTrainer::new().fit(&separable()).unwrap();
        assert_eq!(model.predict(&features(&["good"])).label, Label::Positive);
        assert_eq!(model.predict(&features(&["bad"])).label, Label::Negative);
        assert!(model.predict(&features(&["good"])).score > 0.5);
    }

    #[test]
    fn estimates_use_expected_likelihood() {
        let model = NaiveBayesTrainer::new().fit(&separable()).unwrap();
        assert_eq!(model.prior(Label::Positive), 0.5);
        // (2 + 0.5) / (2 + 1)
        let p = model.presence_probability("good", Label::Positive).unwrap();
        assert!((p - 2.5 / 3.0).abs() < 1e-12);
        // (0 + 0.5) / (2 + 1), never zero
        let q = model.presence_probability("good", Label::Negative).unwrap();
        assert!((q - 0.5 / 3.0).abs() < 1e-12);
        assert_eq!(model.vocabulary_len(), 2);
        assert_eq!(model.training_examples(), 4);
    }

    #[test]
    fn single_label_training_is_rejected() {
        let train = vec![example(&["good"], Label::Positive), example(&["nice"], Label::Positive)];
        let err = NaiveBayesTrainer::new().fit(&train).unwrap_err();
        match err {
            Error::InsufficientData { split, reason } => {
                assert_eq!(split, "train");
                assert!(reason.contains("negative"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_training_is_rejected() {
        let err = NaiveBayesTrainer::new().fit(&[]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { split: "train", .. }));
    }

    #[test]
    fn non_positive_smoothing_is_rejected() {
        let err = NaiveBayesTrainer::new()
            .with_smoothing(0.0)
            .fit(&separable())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn unseen_features_are_ignored() {
        let model = NaiveBayesTrainer::new().fit(&separable()).unwrap();
        let known = model.log_scores(&features(&["good"]));
        let padded = model.log_scores(&features(&["good", "zebra", "quokka"]));
        assert_eq!(known, padded);
    }

    #[test]
    fn false_values_count_as_absent() {
        let model = NaiveBayesTrainer::new().fit(&separable()).unwrap();
        let explicit: FeatureMap = [("good", false)].into_iter().collect();
        assert_eq!(model.log_scores(&explicit), model.log_scores(&FeatureMap::new()));
    }

    #[test]
    fn absence_is_evidence() {
        let train = vec![
            example(&["good", "movie"], Label::Positive),
            example(&["good", "film"], Label::Positive),
            example(&["movie"], Label::Negative),
            example(&["film"], Label::Negative),
        ];
        let model = NaiveBayesTrainer::new().fit(&train).unwrap();
        // "good" missing favours negative even though "movie" is neutral
        assert_eq!(model.predict(&features(&["movie"])).label, Label::Negative);
    }

    #[test]
    fn tie_goes_to_positive() {
        let train = vec![example(&["meh"], Label::Positive), example(&["meh"], Label::Negative)];
        let model = NaiveBayesTrainer::new().fit(&train).unwrap();
        let prediction = model.predict(&features(&["meh"]));
        assert_eq!(prediction.label, Label::Positive);
        assert!((prediction.score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn distribution_sums_to_one() {
        let model = NaiveBayesTrainer::new().fit(&separable()).unwrap();
        let dist = model.prob_classify(&features(&["good", "bad"]));
        assert!((dist.negative + dist.positive - 1.0).abs() < 1e-12);
        assert_eq!(dist.prob(Label::Positive), dist.positive);
    }

    #[test]
    fn informative_features_ranked() {
        let train = vec![
            example(&["great", "movie"], Label::Positive),
            example(&["great", "film"], Label::Positive),
            example(&["great"], Label::Positive),
            example(&["awful", "movie"], Label::Negative),
        ];
        let model = NaiveBayesTrainer::new().fit(&train).unwrap();
        let top = model.most_informative_features(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "awful");
        assert_eq!(top[0].favours, Label::Negative);
        assert!(top[0].ratio >= top[1].ratio);
    }

    #[test]
    fn tampered_tables_fail_to_deserialize() {
        let model = NaiveBayesTrainer::new().fit(&separable()).unwrap();
        let mut json: serde_json::Value = serde_json::to_value(&model).unwrap();
        json["priors"] = serde_json::json!([0.0, 1.0]);
        assert!(serde_json::from_value::<NaiveBayesModel>(json).is_err());
    }
}
