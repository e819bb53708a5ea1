// File: src/learning/evaluate.rs
use crate::core::types::{Label, LabeledFeatureMap};
use crate::error::{Error, Result};
use crate::learning::naive_bayes::NaiveBayesModel;
use serde::Serialize;

/// Prediction counts with `Positive` as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positive: usize,
    pub false_positive: usize,
    pub true_negative: usize,
    pub false_negative: usize,
}

impl ConfusionMatrix {
    pub fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Positive, Label::Positive) => self.true_positive += 1,
            (Label::Negative, Label::Positive) => self.false_positive += 1,
            (Label::Negative, Label::Negative) => self.true_negative += 1,
            (Label::Positive, Label::Negative) => self.false_negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }

    pub fn correct(&self) -> usize {
        self.true_positive + self.true_negative
    }

    /// `None` when nothing was predicted positive.
    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    /// `None` when there were no positive examples.
    pub fn recall(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// Share of examples whose predicted label matches, in `[0, 1]`
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
}

pub fn evaluate(model: &NaiveBayesModel, test: &[LabeledFeatureMap]) -> Result<Evaluation> {
    if test.is_empty() {
        return Err(Error::insufficient("test", "no examples to evaluate"));
    }
    let mut confusion = ConfusionMatrix::default();
    for example in test {
        confusion.record(example.label, model.predict(&example.features).label);
    }
    Ok(Evaluation {
        accuracy: confusion.correct() as f64 / confusion.total() as f64,
        confusion,
    })
}

pub fn accuracy(model: &NaiveBayesModel, test: &[LabeledFeatureMap]) -> Result<f64> {
    evaluate(model, test).map(|e| e.accuracy)
}
