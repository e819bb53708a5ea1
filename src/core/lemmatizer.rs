// File: src/core/lemmatizer.rs
use crate::core::assets::LanguageAssets;
use crate::core::types::WordClass;
use std::sync::Arc;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
    ("ier", "y"),
    ("iest", "y"),
];

/// Dictionary-backed lemmatizer using suffix detachment.
///
/// A word is reduced by trying each detachment rule of its word class and
/// keeping the candidates the lemma dictionary knows. The shortest known
/// candidate wins. A word with no known candidate is returned unchanged.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    assets: Arc<LanguageAssets>,
}

impl Lemmatizer {
    pub fn new(assets: Arc<LanguageAssets>) -> Self {
        Self { assets }
    }

    pub fn lemmatize(&self, word: &str, class: WordClass) -> String {
        let lower = word.to_lowercase();

        if let Some(lemma) = self.assets.exception(class, &lower) {
            return lemma.to_string();
        }

        let mut best: Option<String> = None;
        let mut consider = |candidate: String| {
            if self.assets.is_lemma(class, &candidate)
                && best.as_ref().map_or(true, |b| candidate.len() < b.len())
            {
                best = Some(candidate);
            }
        };

        consider(lower.clone());
        for &(suffix, ending) in rules(class) {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                consider(format!("{stem}{ending}"));
                // running -> runn -> run, stopped -> stopp -> stop
                if ending.is_empty() && class == WordClass::Verb {
                    if let Some(single) = undouble(stem) {
                        consider(single.to_string());
                    }
                }
            }
        }

        match best {
            Some(lemma) if lemma == lower => word.to_string(),
            Some(lemma) => lemma,
            None => word.to_string(),
        }
    }
}

fn rules(class: WordClass) -> &'static [(&'static str, &'static str)] {
    match class {
        WordClass::Noun => NOUN_RULES,
        WordClass::Verb => VERB_RULES,
        WordClass::Adjective => ADJECTIVE_RULES,
        WordClass::Adverb => &[],
    }
}

fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3
        && bytes[n - 1] == bytes[n - 2]
        && bytes[n - 1].is_ascii_alphabetic()
        && !b"aeiou".contains(&bytes[n - 1])
    {
        Some(&stem[..n - 1])
    } else {
        None
    }
}
