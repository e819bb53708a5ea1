// File: src/corpus.rs
//! Readers for the flat files the data-collection scripts produce.
//!
//! A corpus is either bound to one label (every record gets it) or carries a
//! label per record. Supported layouts, picked by extension:
//!
//! - `.json` / `.jsonl`: one JSON object per line with a `text` field
//! - `.csv`: header row, configurable text and label columns
//! - anything else: one example per line; labeled files use `label<TAB>text`

use crate::core::types::{Label, RawExample};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    JsonLines,
    Csv,
    Text,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") | Some("jsonl") => CorpusFormat::JsonLines,
            Some("csv") => CorpusFormat::Csv,
            _ => CorpusFormat::Text,
        }
    }
}

/// Field / column names holding the text and the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusColumns {
    pub text: String,
    pub label: String,
}

impl Default for CorpusColumns {
    fn default() -> Self {
        Self {
            text: "text".to_string(),
            label: "label".to_string(),
        }
    }
}

/// A corpus file and the label its records get, if it is bound to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSource {
    pub path: PathBuf,
    pub label: Option<Label>,
}

impl CorpusSource {
    pub fn positive(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), label: Some(Label::Positive) }
    }

    pub fn negative(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), label: Some(Label::Negative) }
    }

    /// A corpus whose records carry their own labels.
    pub fn labeled(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), label: None }
    }

    pub fn read(&self, columns: &CorpusColumns) -> Result<Vec<RawExample>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::corpus(self.path.display().to_string(), format!("cannot read file: {e}"))
        })?;
        let examples = match CorpusFormat::from_path(&self.path) {
            CorpusFormat::JsonLines => self.parse_json_lines(&contents, columns)?,
            CorpusFormat::Csv => self.parse_csv(&contents, columns)?,
            CorpusFormat::Text => self.parse_text(&contents)?,
        };
        if examples.is_empty() {
            warn!(path = %self.path.display(), "corpus has no examples");
        } else {
            debug!(path = %self.path.display(), examples = examples.len(), "read corpus");
        }
        Ok(examples)
    }

    fn parse_json_lines(&self, contents: &str, columns: &CorpusColumns) -> Result<Vec<RawExample>> {
        let mut examples = Vec::new();
        for (no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: Value = serde_json::from_str(line)
                .map_err(|e| self.invalid(no, format!("not a JSON object: {e}")))?;
            let text = record
                .get(&columns.text)
                .and_then(Value::as_str)
                .ok_or_else(|| self.invalid(no, format!("missing string field '{}'", columns.text)))?;
            let label = match self.label {
                Some(label) => label,
                None => record
                    .get(&columns.label)
                    .and_then(json_label)
                    .ok_or_else(|| self.invalid(no, format!("missing or invalid '{}'", columns.label)))?,
            };
            examples.push(RawExample::new(text, label));
        }
        Ok(examples)
    }

    fn parse_csv(&self, contents: &str, columns: &CorpusColumns) -> Result<Vec<RawExample>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(contents.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| self.invalid(0, format!("unreadable header: {e}")))?
            .clone();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let text_idx = column(&columns.text)
            .ok_or_else(|| self.invalid(0, format!("no '{}' column", columns.text)))?;
        let label_idx = match self.label {
            Some(_) => None,
            None => Some(
                column(&columns.label)
                    .ok_or_else(|| self.invalid(0, format!("no '{}' column", columns.label)))?,
            ),
        };

        let mut examples = Vec::new();
        for (no, record) in reader.records().enumerate() {
            // header is line 1
            let no = no + 1;
            let record = record.map_err(|e| self.invalid(no, e.to_string()))?;
            let text = record
                .get(text_idx)
                .ok_or_else(|| self.invalid(no, "short record"))?;
            let label = match self.label {
                Some(label) => label,
                None => label_idx
                    .and_then(|idx| record.get(idx))
                    .and_then(Label::parse)
                    .ok_or_else(|| self.invalid(no, format!("invalid '{}'", columns.label)))?,
            };
            examples.push(RawExample::new(text, label));
        }
        Ok(examples)
    }

    fn parse_text(&self, contents: &str) -> Result<Vec<RawExample>> {
        let mut examples = Vec::new();
        for (no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let example = match self.label {
                Some(label) => RawExample::new(line, label),
                None => {
                    let (label, text) = line
                        .split_once('\t')
                        .ok_or_else(|| self.invalid(no, "expected 'label<TAB>text'"))?;
                    let label = Label::parse(label)
                        .ok_or_else(|| self.invalid(no, format!("invalid label '{label}'")))?;
                    RawExample::new(text, label)
                }
            };
            examples.push(example);
        }
        Ok(examples)
    }

    fn invalid(&self, no: usize, reason: impl std::fmt::Display) -> Error {
        Error::corpus(
            self.path.display().to_string(),
            format!("line {}: {}", no + 1, reason),
        )
    }
}

fn json_label(value: &Value) -> Option<Label> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()).and_then(|n| Label::try_from(n).ok()),
        Value::String(s) => Label::parse(s),
        _ => None,
    }
}
