//! # tourney-store — Record Collection Access
//!
//! The archive is a flat directory of `*.json` files, one per tournament.
//! This crate is the only place that touches those files: it lists them in
//! the deterministic order the auditor requires, reads them as raw bytes
//! plus parsed document, and writes them back.
//!
//! ## Ordering Invariant
//!
//! `list_records` returns paths in lexicographic order. The auditor's name
//! registries are first-writer-wins, so traversal order decides which
//! spelling becomes canonical — the sort here is what makes audit runs
//! reproducible.
//!
//! ## Encoding
//!
//! Records are UTF-8 with `\n` line endings and a single trailing newline.
//! Reads return the raw on-disk text untranslated so the auditor can compare
//! it byte-for-byte against canonical form.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Characters that may not appear in a record file name.
const ILLEGAL_FILENAME_CHARS: &str = "/\\?*\"<>|:";

/// Error accessing the record collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error reading or writing a record.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record's content is not well-formed JSON. This aborts an audit run.
    #[error("{path} is not well-formed JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Access to one archive directory of record files.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Open the archive rooted at `root` (the directory holding the `*.json`
    /// record files). The directory is not required to exist yet; `list_records`
    /// and reads will surface the error if it does not.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The archive directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All record paths, lexicographically sorted.
    ///
    /// Only `*.json` files count as records; anything else in the directory
    /// (editor droppings, READMEs) is ignored.
    pub fn list_records(&self) -> Result<Vec<PathBuf>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        tracing::debug!(count = paths.len(), root = %self.root.display(), "listed records");
        Ok(paths)
    }

    /// Read one record: the raw on-disk text and its parsed document.
    ///
    /// # Errors
    ///
    /// `StoreError::Malformed` if the file is not well-formed JSON — the
    /// caller treats this as fatal for the whole run.
    pub fn read_record(&self, path: &Path) -> Result<(String, Value), StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((raw, document))
    }

    /// Overwrite a record with new contents (canonical bytes).
    pub fn write_record(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        fs::write(path, contents).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote record");
        Ok(())
    }

    /// The path a record for the given tournament title is stored at.
    pub fn record_path_for_title(&self, title: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_filename(title)))
    }
}

/// Strip the characters that are illegal in file names on common filesystems.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(*c))
        .collect()
}
