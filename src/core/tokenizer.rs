// File: src/core/tokenizer.rs
//! Word-level tokenizer for short social-media texts.
//!
//! Splitting is a single leftmost-first regex scan. Alternatives are tried in
//! priority order so that URLs, `@handles`, hashtags and emoticons come out
//! as single tokens instead of being shredded at their punctuation:
//!
//! ```ignore
//! "Loved it :) see https://t.co/x @bob" -> ["Loved", "it", ":)", "see", "https://t.co/x", "@bob"]
//! ```
//!
//! Each token is then tagged by [`PosTagger`].

use crate::core::assets::LanguageAssets;
use crate::core::tagger::PosTagger;
use crate::core::types::Token;
use regex::Regex;
use std::sync::Arc;

const TOKEN_PATTERNS: &[&str] = &[
    // urls
    r"https?://\S+",
    r"www\.\S+",
    // handles and hashtags
    r"@[A-Za-z0-9_]+",
    r"#[\p{L}\p{N}_]+",
    // emoticons
    r"[<>]?[:;=][\-o*']?[)\](\[dDpP/\\|}{@]",
    r"<3",
    // decimals and times
    r"\d+(?:[.,:]\d+)+",
    // words, with inner apostrophes and hyphens
    r"[\p{L}\p{M}\p{N}_]+(?:['’\-][\p{L}\p{M}\p{N}_]+)*",
    // punctuation runs
    r"[^\s\p{L}\p{M}\p{N}_@#]+",
    r"\S",
];

#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    tagger: PosTagger,
}

impl Tokenizer {
    pub fn new(assets: Arc<LanguageAssets>) -> Self {
        let pattern = Regex::new(&TOKEN_PATTERNS.join("|")).expect("token pattern is valid");
        Self {
            pattern,
            tagger: PosTagger::new(assets),
        }
    }

    /// Splits `text` into word-level fragments, without tags.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Splits and tags `text`.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tagger.tag(self.split(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Arc::new(LanguageAssets::english()))
    }

    #[test]
    fn keeps_urls_handles_and_emoticons_whole() {
        let words = tokenizer().split("Loved it :) see https://t.co/x?a=1 @bob_99 #fun!");
        assert_eq!(
            words,
            vec!["Loved", "it", ":)", "see", "https://t.co/x?a=1", "@bob_99", "#fun", "!"]
        );
    }

    #[test]
    fn keeps_contractions_and_hyphenated_words() {
        let words = tokenizer().split("I don't like well-known 3.50 deals...");
        assert_eq!(words, vec!["I", "don't", "like", "well-known", "3.50", "deals", "..."]);
    }

    #[test]
    fn handles_unicode_and_hearts() {
        let words = tokenizer().split("café <3 naïve");
        assert_eq!(words, vec!["café", "<3", "naïve"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenizer().tokenize("   ").is_empty());
    }

    #[test]
    fn tokens_carry_tags() {
        let tokens = tokenizer().tokenize("the movie");
        assert_eq!(tokens, vec![Token::new("the", "DT"), Token::new("movie", "NN")]);
    }
}
