// File: src/core/tagger.rs
use crate::core::assets::LanguageAssets;
use crate::core::types::{Token, WordClass};
use std::sync::Arc;

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "less", "ish", "ic", "ical", "al", "ent", "ant", "y",
];

/// Treebank part-of-speech tagger built from the language assets.
///
/// Each word is tagged in isolation first (lexicon, shape, dictionary,
/// suffix), then a left-to-right pass applies context rules.
#[derive(Debug, Clone)]
pub struct PosTagger {
    assets: Arc<LanguageAssets>,
}

impl PosTagger {
    pub fn new(assets: Arc<LanguageAssets>) -> Self {
        Self { assets }
    }

    pub fn tag(&self, words: Vec<String>) -> Vec<Token> {
        let mut tokens: Vec<Token> = words
            .into_iter()
            .enumerate()
            .map(|(i, word)| {
                let tag = self.initial_tag(&word, i == 0);
                Token::new(word, tag)
            })
            .collect();

        for i in 1..tokens.len() {
            let prev_tag = tokens[i - 1].tag.clone();
            let current = &mut tokens[i];

            if current.tag == "NN" && (prev_tag == "TO" || prev_tag == "MD") {
                current.tag = "VB".to_string();
            } else if prev_tag == "PRP" {
                let lower = current.text.to_lowercase();
                if current.tag == "NN" && self.assets.is_lemma(WordClass::Verb, &lower) {
                    current.tag = "VBP".to_string();
                } else if current.tag == "NNS" {
                    current.tag = "VBZ".to_string();
                }
            }
        }
        tokens
    }

    fn initial_tag(&self, word: &str, sentence_start: bool) -> String {
        let lower = word.to_lowercase();

        if let Some(tag) = self.assets.lexicon_tag(&lower) {
            return tag.to_string();
        }
        if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.") {
            return "NN".to_string();
        }
        if word.starts_with('@') || word.starts_with('#') {
            return "NNP".to_string();
        }
        if !word.chars().any(char::is_alphanumeric) {
            return punctuation_tag(word).to_string();
        }
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '%'))
        {
            return "CD".to_string();
        }

        if self.assets.is_lemma(WordClass::Adjective, &lower) {
            return "JJ".to_string();
        }
        if self.assets.is_lemma(WordClass::Adverb, &lower) {
            return "RB".to_string();
        }
        if self.assets.is_lemma(WordClass::Noun, &lower) {
            return "NN".to_string();
        }
        if self.assets.is_lemma(WordClass::Verb, &lower) {
            return "VB".to_string();
        }

        if let Some(tag) = self.suffix_tag(&lower) {
            return tag.to_string();
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return "NNP".to_string();
        }
        "NN".to_string()
    }

    fn suffix_tag(&self, lower: &str) -> Option<&'static str> {
        if lower.len() > 4 && lower.ends_with("ly") {
            return Some("RB");
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return Some("VBG");
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            return Some("VBD");
        }
        for (suffix, tag) in [("est", "JJS"), ("er", "JJR")] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                let known = self.assets.is_lemma(WordClass::Adjective, stem)
                    || self.assets.is_lemma(WordClass::Adjective, &format!("{stem}e"))
                    || stem
                        .strip_suffix('i')
                        .is_some_and(|s| self.assets.is_lemma(WordClass::Adjective, &format!("{s}y")));
                if known {
                    return Some(tag);
                }
            }
        }
        if lower.len() > 4
            && ADJECTIVE_SUFFIXES
                .iter()
                .any(|suffix| lower.ends_with(suffix))
        {
            return Some("JJ");
        }
        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            let stem = &lower[..lower.len() - 1];
            if self.assets.is_lemma(WordClass::Verb, stem)
                && !self.assets.is_lemma(WordClass::Noun, stem)
            {
                return Some("VBZ");
            }
            return Some("NNS");
        }
        None
    }
}

fn punctuation_tag(word: &str) -> &'static str {
    match word {
        "," => ",",
        "." | "!" | "?" => ".",
        _ if word.chars().all(|c| matches!(c, '.' | '!' | '?')) => ".",
        _ if word.chars().any(|c| matches!(c, ':' | ';' | '=')) && word.len() > 1 => "UH",
        _ => ":",
    }
}
