// File: src/core/assets.rs
//! Language assets: the stop-word list, the tag lexicon and the per-class
//! lemma dictionaries the tokenizer and normalizer read from.
//!
//! Assets are loaded once, up front, into an explicit handle. The pipeline
//! shares that handle with its stages and releases it when it is dropped.
//!
//! A directory of assets holds:
//!
//! - `stopwords.txt`: one stop-word per line
//! - `lexicon.txt`: `word TAG` per line
//! - `lemmas.txt`: `n|v|a|r lemma` per line
//! - `exceptions.txt` (optional): `n|v|a|r inflected lemma` per line
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::core::english;
use crate::core::types::WordClass;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct LanguageAssets {
    language: String,
    stop_words: HashSet<String>,
    lexicon: HashMap<String, String>,
    lemmas: HashMap<WordClass, HashSet<String>>,
    exceptions: HashMap<WordClass, HashMap<String, String>>,
}

impl LanguageAssets {
    /// Loads assets for `language`, from `dir` when one is given, otherwise
    /// from the built-in tables (English only).
    pub fn load(language: &str, dir: Option<&Path>) -> Result<Self> {
        let assets = match dir {
            Some(dir) => Self::from_dir(language, dir)?,
            None if is_english(language) => Self::english(),
            None => {
                return Err(Error::ResourceUnavailable(format!(
                    "no built-in assets for language '{}'; supply an assets directory",
                    language
                )))
            }
        };
        info!(
            language = %assets.language,
            stop_words = assets.stop_words.len(),
            lexicon = assets.lexicon.len(),
            lemmas = assets.lemmas.values().map(HashSet::len).sum::<usize>(),
            "loaded language assets"
        );
        Ok(assets)
    }

    /// The built-in English tables.
    pub fn english() -> Self {
        let mut assets = Self {
            language: "english".to_string(),
            ..Self::default()
        };
        assets.stop_words = english::STOP_WORDS.iter().map(|w| w.to_string()).collect();
        assets.lexicon = english::LEXICON
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect();

        for (class, words) in [
            (WordClass::Noun, english::NOUNS),
            (WordClass::Verb, english::VERBS),
            (WordClass::Adjective, english::ADJECTIVES),
            (WordClass::Adverb, english::ADVERBS),
        ] {
            assets
                .lemmas
                .insert(class, words.iter().map(|w| w.to_string()).collect());
        }

        for (class, table) in [
            (WordClass::Noun, english::NOUN_EXCEPTIONS),
            (WordClass::Verb, english::VERB_EXCEPTIONS),
            (WordClass::Adjective, english::ADJECTIVE_EXCEPTIONS),
        ] {
            assets.exceptions.insert(
                class,
                table
                    .iter()
                    .map(|(inflected, lemma)| (inflected.to_string(), lemma.to_string()))
                    .collect(),
            );
        }
        assets
    }

    /// Reads an asset directory. Every file except `exceptions.txt` is required.
    pub fn from_dir(language: &str, dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::ResourceUnavailable(format!(
                "asset directory {} does not exist",
                dir.display()
            )));
        }

        let mut assets = Self {
            language: language.to_ascii_lowercase(),
            ..Self::default()
        };

        for line in read_asset(dir, "stopwords.txt")? {
            assets.stop_words.insert(line.to_lowercase());
        }

        for (no, line) in read_asset(dir, "lexicon.txt")?.iter().enumerate() {
            match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [word, tag] => {
                    assets.lexicon.insert(word.to_lowercase(), tag.to_string());
                }
                _ => return Err(malformed("lexicon.txt", no, line)),
            }
        }

        for (no, line) in read_asset(dir, "lemmas.txt")?.iter().enumerate() {
            match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [code, lemma] => {
                    let class =
                        WordClass::from_code(code).ok_or_else(|| malformed("lemmas.txt", no, line))?;
                    assets
                        .lemmas
                        .entry(class)
                        .or_default()
                        .insert(lemma.to_lowercase());
                }
                _ => return Err(malformed("lemmas.txt", no, line)),
            }
        }

        if dir.join("exceptions.txt").is_file() {
            for (no, line) in read_asset(dir, "exceptions.txt")?.iter().enumerate() {
                match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                    [code, inflected, lemma] => {
                        let class = WordClass::from_code(code)
                            .ok_or_else(|| malformed("exceptions.txt", no, line))?;
                        assets
                            .exceptions
                            .entry(class)
                            .or_default()
                            .insert(inflected.to_lowercase(), lemma.to_string());
                    }
                    _ => return Err(malformed("exceptions.txt", no, line)),
                }
            }
        }

        Ok(assets)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Case-insensitive stop-word check.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Tag for a lower-cased word, if the lexicon pins one.
    pub fn lexicon_tag(&self, word: &str) -> Option<&str> {
        self.lexicon.get(word).map(String::as_str)
    }

    /// Whether `word` (lower-cased) is a known base form of `class`.
    pub fn is_lemma(&self, class: WordClass, word: &str) -> bool {
        self.lemmas
            .get(&class)
            .is_some_and(|set| set.contains(word))
    }

    /// Irregular lemma for a lower-cased inflected form.
    pub fn exception(&self, class: WordClass, word: &str) -> Option<&str> {
        self.exceptions
            .get(&class)
            .and_then(|table| table.get(word))
            .map(String::as_str)
    }
}

fn is_english(language: &str) -> bool {
    matches!(language.to_ascii_lowercase().as_str(), "english" | "en")
}

fn read_asset(dir: &Path, name: &str) -> Result<Vec<String>> {
    let path = dir.join(name);
    let contents = fs::read_to_string(&path).map_err(|e| {
        Error::ResourceUnavailable(format!("cannot read {}: {}", path.display(), e))
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn malformed(file: &str, no: usize, line: &str) -> Error {
    Error::ResourceUnavailable(format!("malformed entry {} in {}: '{}'", no + 1, file, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builtin_english_is_available() {
        let assets = LanguageAssets::load("English", None).unwrap();
        assert_eq!(assets.language(), "english");
        assert!(assets.is_stop_word("The"));
        assert!(assets.is_stop_word("don't"));
        assert!(!assets.is_stop_word("movie"));
        assert!(assets.is_lemma(WordClass::Adjective, "good"));
        assert_eq!(assets.exception(WordClass::Verb, "went"), Some("go"));
    }

    #[test]
    fn unknown_language_without_directory_is_unavailable() {
        let err = LanguageAssets::load("klingon", None).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable(_)));
    }

    #[test]
    fn missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = LanguageAssets::load("english", Some(&dir.path().join("nope"))).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable(_)));
    }

    #[test]
    fn missing_required_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stopwords.txt"), "der\ndie\n").unwrap();
        let err = LanguageAssets::load("german", Some(dir.path())).unwrap_err();
        match err {
            Error::ResourceUnavailable(msg) => assert!(msg.contains("lexicon.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_directory_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stopwords.txt"), "# German\nder\ndie\n").unwrap();
        fs::write(dir.path().join("lexicon.txt"), "der DT\nund CC\n").unwrap();
        fs::write(dir.path().join("lemmas.txt"), "n haus\na gut\n").unwrap();
        fs::write(dir.path().join("exceptions.txt"), "n häuser haus\n").unwrap();

        let assets = LanguageAssets::load("German", Some(dir.path())).unwrap();
        assert_eq!(assets.language(), "german");
        assert!(assets.is_stop_word("Die"));
        assert_eq!(assets.lexicon_tag("und"), Some("CC"));
        assert!(assets.is_lemma(WordClass::Noun, "haus"));
        assert_eq!(assets.exception(WordClass::Noun, "häuser"), Some("haus"));
    }

    #[test]
    fn malformed_lemma_line_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stopwords.txt"), "the\n").unwrap();
        fs::write(dir.path().join("lexicon.txt"), "the DT\n").unwrap();
        fs::write(dir.path().join("lemmas.txt"), "x cat\n").unwrap();
        let err = LanguageAssets::from_dir("english", dir.path()).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable(_)));
    }
}
