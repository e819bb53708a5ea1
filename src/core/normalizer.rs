// File: src/core/normalizer.rs
use crate::core::assets::LanguageAssets;
use crate::core::lemmatizer::Lemmatizer;
use crate::core::types::{CleanedTokens, Token, WordClass};
use regex::Regex;
use std::sync::Arc;

const URL_PATTERN: &str =
    r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+#]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";
const HANDLE_PATTERN: &str = r"@[A-Za-z0-9_]+";

/// Optional stages layered on top of noise stripping, stop-word removal and
/// lemmatization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Remove every non-alphanumeric character from each lemma.
    pub strip_non_alphanumeric: bool,
    /// Lower-case each lemma.
    pub lowercase: bool,
}

/// Turns tagged tokens into the lemmas that become features.
#[derive(Debug, Clone)]
pub struct Normalizer {
    assets: Arc<LanguageAssets>,
    lemmatizer: Lemmatizer,
    url: Regex,
    handle: Regex,
    options: NormalizerOptions,
}

impl Normalizer {
    pub fn new(assets: Arc<LanguageAssets>, options: NormalizerOptions) -> Self {
        Self {
            lemmatizer: Lemmatizer::new(Arc::clone(&assets)),
            assets,
            url: Regex::new(URL_PATTERN).expect("url pattern is valid"),
            handle: Regex::new(HANDLE_PATTERN).expect("handle pattern is valid"),
            options,
        }
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    /// Removes URL- and handle-shaped substrings.
    pub fn strip_noise(&self, text: &str) -> String {
        let without_urls = self.url.replace_all(text, "");
        self.handle.replace_all(&without_urls, "").into_owned()
    }

    /// Cleans one example. Order is preserved; stop-words and tokens left
    /// empty by stripping are dropped.
    pub fn normalize(&self, tokens: &[Token]) -> CleanedTokens {
        tokens
            .iter()
            .filter_map(|token| self.normalize_token(token))
            .collect()
    }

    fn normalize_token(&self, token: &Token) -> Option<String> {
        let stripped = self.strip_noise(&token.text);
        if stripped.is_empty() || self.assets.is_stop_word(&stripped) {
            return None;
        }

        let class = WordClass::from_tag(&token.tag);
        let mut lemma = self.lemmatizer.lemmatize(&stripped, class);

        if self.options.strip_non_alphanumeric {
            lemma.retain(char::is_alphanumeric);
        }
        if self.options.lowercase {
            lemma = lemma.to_lowercase();
        }
        // the optional stages can turn "#the" into a stop-word
        if lemma.is_empty() || self.assets.is_stop_word(&lemma) {
            None
        } else {
            Some(lemma)
        }
    }
}
