// File: src/learning/mod.rs
pub mod evaluate;
pub mod naive_bayes;

pub use evaluate::{accuracy, evaluate, ConfusionMatrix, Evaluation};
pub use naive_bayes::{Distribution, InformativeFeature, NaiveBayesModel, NaiveBayesTrainer, Prediction};
