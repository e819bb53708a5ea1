// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod learning;
pub mod persistence;
pub mod training;

pub use crate::config::TrainConfig;
pub use crate::core::engine::TextPipeline;
pub use crate::core::types::{FeatureMap, Label, LabeledFeatureMap, RawExample};
pub use crate::error::{Error, Result};
pub use crate::learning::{NaiveBayesModel, NaiveBayesTrainer};
pub use crate::persistence::{load_model, save_model, ModelFormat};
pub use crate::training::{run, train, TrainingReport, TrainingRun};
