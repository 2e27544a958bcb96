//! JSON spell list storage.
//!
//! Spell lists are JSON arrays. Output is pretty-printed with a configurable
//! indent, keeps object keys in input order, and writes non-ASCII text as-is.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::models::SpellRecord;

/// Errors reading or writing spell lists.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("The file '{}' was not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Could not decode JSON from '{}': {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write '{}': {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unexpected error reading '{}': {source}", path.display())]
    UnexpectedIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize spells: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a spell list from a JSON file.
///
/// The top level must be an array. Its entries are taken as-is, whatever
/// their shape.
pub fn load_spells(path: &Path) -> Result<Vec<SpellRecord>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(StoreError::UnexpectedIo {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let records: Vec<SpellRecord> =
        serde_json::from_str(&contents).map_err(|source| StoreError::InputMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Loaded {} spells from {}", records.len(), path.display());
    Ok(records)
}

/// Serialize records as pretty JSON indented by `indent` spaces.
pub fn to_pretty_json(records: &[SpellRecord], indent: usize) -> Result<String, StoreError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write records to `path`, creating the parent directory if needed.
pub fn save_spells(path: &Path, records: &[SpellRecord], indent: usize) -> Result<(), StoreError> {
    let mut json = to_pretty_json(records, indent)?;
    json.push('\n');

    let write_failed = |source| StoreError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_failed)?;
    }
    fs::write(path, json).map_err(write_failed)?;

    tracing::info!("Saved {} spells to {}", records.len(), path.display());
    Ok(())
}
