// File: src/core/features.rs
use crate::core::types::FeatureMap;

/// Bag-of-words presence features. Frequency and order are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract<S: AsRef<str>>(&self, lemmas: &[S]) -> FeatureMap {
        lemmas
            .iter()
            .map(|lemma| (lemma.as_ref(), true))
            .collect()
    }
}
