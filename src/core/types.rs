// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentiment class of an example. `1` is positive, `0` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Negative = 0,
    Positive = 1,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Negative, Label::Positive];

    /// Position of this label in per-label tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn other(self) -> Label {
        match self {
            Label::Negative => Label::Positive,
            Label::Positive => Label::Negative,
        }
    }

    /// Parses the label spellings found in corpus files.
    pub fn parse(raw: &str) -> Option<Label> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "pos" | "positive" => Some(Label::Positive),
            "0" | "neg" | "negative" => Some(Label::Negative),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(other),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Negative => write!(f, "negative"),
            Label::Positive => write!(f, "positive"),
        }
    }
}

/// One labeled input text, consumed once while the dataset is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExample {
    pub text: String,
    pub label: Label,
}

impl RawExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self { text: text.into(), label }
    }
}

/// A word-level fragment of text with its Penn Treebank tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: String,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { text: text.into(), tag: tag.into() }
    }
}

/// Reduced part-of-speech set the lemmatizer is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

impl WordClass {
    /// Maps a Treebank tag by its first letter; anything unrecognised is a noun.
    pub fn from_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => WordClass::Adjective,
            Some('V') => WordClass::Verb,
            Some('N') => WordClass::Noun,
            Some('R') => WordClass::Adverb,
            _ => WordClass::Noun,
        }
    }

    /// One-letter code used in asset files.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" | "s" => Some(WordClass::Adjective),
            "v" => Some(WordClass::Verb),
            "n" => Some(WordClass::Noun),
            "r" => Some(WordClass::Adverb),
            _ => None,
        }
    }
}

/// Ordered lemmas of one example after noise and stop-word removal.
pub type CleanedTokens = Vec<String>;

/// Bag-of-words presence map. A key mapped to `false` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMap(BTreeMap<String, bool>);

impl FeatureMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, present: bool) {
        self.0.insert(key.into(), present);
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Keys whose value is `true`, in sorted order.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter(|&(_, &v)| v).map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A feature map with the label of the example it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledFeatureMap {
    pub features: FeatureMap,
    pub label: Label,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_prefix_maps_to_word_class() {
        assert_eq!(WordClass::from_tag("JJR"), WordClass::Adjective);
        assert_eq!(WordClass::from_tag("VBD"), WordClass::Verb);
        assert_eq!(WordClass::from_tag("NNS"), WordClass::Noun);
        assert_eq!(WordClass::from_tag("RB"), WordClass::Adverb);
        assert_eq!(WordClass::from_tag("DT"), WordClass::Noun);
        assert_eq!(WordClass::from_tag(""), WordClass::Noun);
    }

    #[test]
    fn label_parsing() {
        assert_eq!(Label::parse(" Positive "), Some(Label::Positive));
        assert_eq!(Label::parse("0"), Some(Label::Negative));
        assert_eq!(Label::parse("maybe"), None);
        assert_eq!(Label::try_from(1u8), Ok(Label::Positive));
        assert_eq!(Label::try_from(2u8), Err(2));
    }

    #[test]
    fn false_entries_are_absent() {
        let map: FeatureMap = [("good", true), ("bad", false)].into_iter().collect();
        assert!(map.is_present("good"));
        assert!(!map.is_present("bad"));
        assert!(!map.is_present("ugly"));
        assert_eq!(map.present().collect::<Vec<_>>(), vec!["good"]);
    }
}
