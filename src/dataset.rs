// File: src/dataset.rs
use crate::core::engine::TextPipeline;
use crate::core::types::{Label, LabeledFeatureMap, RawExample};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

/// Share of the shuffled dataset that goes to training.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Featurizes raw examples through a [`TextPipeline`].
pub struct DatasetBuilder<'a> {
    pipeline: &'a TextPipeline,
    examples: Vec<LabeledFeatureMap>,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(pipeline: &'a TextPipeline) -> Self {
        Self {
            pipeline,
            examples: Vec::new(),
        }
    }

    pub fn add_example(&mut self, example: &RawExample) {
        self.examples.push(LabeledFeatureMap {
            features: self.pipeline.featurize(&example.text),
            label: example.label,
        });
    }

    pub fn add_examples<'e, I>(&mut self, examples: I)
    where
        I: IntoIterator<Item = &'e RawExample>,
    {
        let before = self.examples.len();
        for example in examples {
            self.add_example(example);
        }
        debug!(added = self.examples.len() - before, "featurized examples");
    }

    /// Adds every text of a corpus bound to a single label.
    pub fn add_texts<S: AsRef<str>>(&mut self, texts: &[S], label: Label) {
        for text in texts {
            self.examples.push(LabeledFeatureMap {
                features: self.pipeline.featurize(text.as_ref()),
                label,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn build(self) -> Dataset {
        Dataset::new(self.examples)
    }
}

/// All featurized examples, in insertion order until shuffled.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    examples: Vec<LabeledFeatureMap>,
}

/// Train/test halves of one shuffled dataset and the seed that shuffled it.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Vec<LabeledFeatureMap>,
    pub test: Vec<LabeledFeatureMap>,
    pub seed: u64,
}

impl Dataset {
    pub fn new(examples: Vec<LabeledFeatureMap>) -> Self {
        Self { examples }
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> &[LabeledFeatureMap] {
        &self.examples
    }

    /// Number of examples carrying `label`.
    pub fn count(&self, label: Label) -> usize {
        self.examples.iter().filter(|e| e.label == label).count()
    }

    /// Shuffles once with `seed` and cuts at `floor(len * train_ratio)`.
    ///
    /// The cut is by index only, so class balance in each half is whatever
    /// the shuffle produced.
    pub fn shuffle_split(mut self, train_ratio: f64, seed: u64) -> Result<Split> {
        if self.examples.is_empty() {
            return Err(Error::insufficient("dataset", "no examples to split"));
        }
        if !(train_ratio > 0.0 && train_ratio < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "train ratio must be in (0, 1), got {train_ratio}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        self.examples.shuffle(&mut rng);

        let cut = split_index(self.examples.len(), train_ratio);
        let test = self.examples.split_off(cut);
        let train = self.examples;

        info!(seed, train = train.len(), test = test.len(), "shuffled and split dataset");
        Ok(Split { train, test, seed })
    }
}

/// `floor(len * ratio)`, tolerant of ratios like 0.29 that have no exact
/// binary representation.
fn split_index(len: usize, train_ratio: f64) -> usize {
    let exact = len as f64 * train_ratio;
    ((exact + 1e-9 * exact.max(1.0)).floor() as usize).min(len)
}

/// The configured seed, or a fresh one when none is configured.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::NormalizerOptions;
    use crate::core::types::FeatureMap;

    fn numbered(n: usize) -> Dataset {
        Dataset::new(
            (0..n)
                .map(|i| LabeledFeatureMap {
                    features: [(format!("id{i}"), true)].into_iter().collect(),
                    label: if i % 2 == 0 { Label::Positive } else { Label::Negative },
                })
                .collect(),
        )
    }

    fn id_of(example: &LabeledFeatureMap) -> String {
        example.features.present().next().unwrap().to_string()
    }

    #[test]
    fn eighty_twenty_split_sizes() {
        let split = numbered(10_000).shuffle_split(DEFAULT_TRAIN_RATIO, 7).unwrap();
        assert_eq!(split.train.len(), 8000);
        assert_eq!(split.test.len(), 2000);
        assert_eq!(split.seed, 7);

        let mut ids: Vec<String> = split.train.iter().chain(split.test.iter()).map(id_of).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn same_seed_same_split() {
        let a = numbered(50).shuffle_split(0.8, 42).unwrap();
        let b = numbered(50).shuffle_split(0.8, 42).unwrap();
        let ids = |s: &Split| s.train.iter().map(id_of).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));

        let c = numbered(50).shuffle_split(0.8, 43).unwrap();
        assert_ne!(ids(&a), ids(&c));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = Dataset::default().shuffle_split(0.8, 1).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { split: "dataset", .. }));
    }

    #[test]
    fn inexact_ratios_cut_where_expected() {
        assert_eq!(split_index(100, 0.29), 29);
        assert_eq!(split_index(100, 0.57), 57);
        assert_eq!(split_index(10, 0.25), 2);
        assert_eq!(split_index(3, 0.5), 1);

        let split = numbered(100).shuffle_split(0.29, 5).unwrap();
        assert_eq!(split.train.len(), 29);
        assert_eq!(split.test.len(), 71);
    }

    #[test]
    fn bad_ratio_is_rejected() {
        assert!(numbered(10).shuffle_split(1.0, 1).is_err());
        assert!(numbered(10).shuffle_split(0.0, 1).is_err());
    }

    #[test]
    fn builder_featurizes_with_labels() {
        let pipeline = TextPipeline::load("english", None, NormalizerOptions::default()).unwrap();
        let mut builder = DatasetBuilder::new(&pipeline);
        builder.add_texts(&["what a great movie"], Label::Positive);
        builder.add_examples(&[RawExample::new("terrible movies", Label::Negative)]);
        let dataset = builder.build();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.count(Label::Positive), 1);
        let expected: FeatureMap = [("great", true), ("movie", true)].into_iter().collect();
        assert_eq!(dataset.examples()[0].features, expected);
        assert!(dataset.examples()[1].features.is_present("movie"));
    }
}
