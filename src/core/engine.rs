use crate::core::assets::LanguageAssets;
use crate::core::features::FeatureExtractor;
use crate::core::normalizer::{Normalizer, NormalizerOptions};
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{CleanedTokens, FeatureMap};
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Tokenizer -> Normalizer -> FeatureExtractor over one shared asset handle.
///
/// The assets are dropped with the last pipeline (or stage) that holds them.
#[derive(Debug, Clone)]
pub struct TextPipeline {
    assets: Arc<LanguageAssets>,
    tokenizer: Tokenizer,
    normalizer: Normalizer,
    extractor: FeatureExtractor,
}

impl TextPipeline {
    pub fn new(assets: LanguageAssets, options: NormalizerOptions) -> Self {
        let assets = Arc::new(assets);
        Self {
            tokenizer: Tokenizer::new(Arc::clone(&assets)),
            normalizer: Normalizer::new(Arc::clone(&assets), options),
            extractor: FeatureExtractor::new(),
            assets,
        }
    }

    /// Loads the language assets and builds the pipeline around them.
    pub fn load(language: &str, assets_dir: Option<&Path>, options: NormalizerOptions) -> Result<Self> {
        let assets = LanguageAssets::load(language, assets_dir)?;
        Ok(Self::new(assets, options))
    }

    pub fn assets(&self) -> &LanguageAssets {
        &self.assets
    }

    /// Tokens of `text` after noise stripping, stop-word removal and
    /// lemmatization.
    pub fn clean(&self, text: &str) -> CleanedTokens {
        self.normalizer.normalize(&self.tokenizer.tokenize(text))
    }

    pub fn featurize(&self, text: &str) -> FeatureMap {
        self.extractor.extract(&self.clean(text))
    }
}
