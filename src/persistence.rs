// File: src/persistence.rs
use crate::error::{Error, Result};
use crate::learning::NaiveBayesModel;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Prefix of every binary model file.
pub const MAGIC: &[u8; 8] = b"SNTNBAYS";
/// Bumped whenever [`ModelFile`] changes shape.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// Magic prefix followed by a bincode body.
    #[default]
    Bincode,
    /// Pretty-printed JSON.
    Json,
}

impl ModelFormat {
    /// JSON for `.json` paths, bincode otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ModelFormat::Json,
            _ => ModelFormat::Bincode,
        }
    }
}

/// What actually goes on disk: the model plus the layout version.
#[derive(Serialize, Deserialize)]
struct ModelFile<M> {
    format_version: u32,
    model: M,
}

pub fn write_model<W: Write>(model: &NaiveBayesModel, mut writer: W, format: ModelFormat) -> Result<()> {
    let file = ModelFile {
        format_version: FORMAT_VERSION,
        model,
    };
    match format {
        ModelFormat::Bincode => {
            writer.write_all(MAGIC)?;
            bincode::serialize_into(&mut writer, &file).map_err(|e| match *e {
                bincode::ErrorKind::Io(io) => Error::Io(io),
                other => Error::CorruptModel(format!("cannot encode model: {other}")),
            })?;
        }
        ModelFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &file).map_err(|e| {
                if e.is_io() {
                    Error::Io(e.into())
                } else {
                    Error::CorruptModel(format!("cannot encode model: {e}"))
                }
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Reads a model in either format, detected from the first bytes.
pub fn read_model<R: Read>(mut reader: R) -> Result<NaiveBayesModel> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let file: ModelFile<NaiveBayesModel> = if let Some(body) = bytes.strip_prefix(MAGIC.as_slice()) {
        bincode::deserialize(body).map_err(|e| Error::CorruptModel(e.to_string()))?
    } else if bytes.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{') {
        serde_json::from_slice(&bytes).map_err(|e| Error::CorruptModel(e.to_string()))?
    } else {
        return Err(Error::CorruptModel("unrecognised model file header".to_string()));
    };

    if file.format_version != FORMAT_VERSION {
        return Err(Error::CorruptModel(format!(
            "unsupported format version {} (expected {})",
            file.format_version, FORMAT_VERSION
        )));
    }
    Ok(file.model)
}

/// Writes to a temporary file beside `path`, then renames it into place.
pub fn save_model(model: &NaiveBayesModel, path: &Path, format: ModelFormat) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    write_model(model, BufWriter::new(&temp_file), format)?;
    temp_file.persist(path).map_err(|e| Error::Io(e.error))?;

    info!(path = %path.display(), ?format, vocabulary = model.vocabulary_len(), "saved model");
    Ok(())
}

pub fn load_model(path: &Path) -> Result<NaiveBayesModel> {
    let file = File::open(path)?;
    let model = read_model(BufReader::new(file))?;
    info!(path = %path.display(), vocabulary = model.vocabulary_len(), "loaded model");
    Ok(model)
}
