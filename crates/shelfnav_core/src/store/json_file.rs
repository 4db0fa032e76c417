//! JSON file store.
//!
//! # Responsibility
//! - Read the inventory document from one JSON file.
//! - Rewrite the whole file on every save.
//!
//! # Invariants
//! - Saves go through a temp file in the target directory, then rename.
//! - Output is pretty-printed with 4-space indentation.
//! - Load never mutates the file.

use super::{DocumentStore, StoreError, StoreResult};
use crate::model::inventory::Document;
use log::{error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Default backing file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory_data.json";

const JSON_INDENT: &[u8] = b"    ";

/// Store backed by a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `inventory_data.json` in the current working directory.
    pub fn in_working_dir() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn read_document(&self) -> StoreResult<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }

        let text = std::fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        let document: Document =
            serde_json::from_str(&text).map_err(|err| StoreError::Malformed {
                path: self.path.clone(),
                message: err.to_string(),
            })?;

        if let Some(violation) = document.find_blank_name() {
            return Err(StoreError::blank_name(
                self.path.clone(),
                violation.level,
                &violation.parents,
            ));
        }
        Ok(document)
    }

    fn write_document(&self, document: &Document) -> StoreResult<()> {
        let mut encoded = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut encoded,
            PrettyFormatter::with_indent(JSON_INDENT),
        );
        document.serialize(&mut serializer)?;

        let mut staged =
            NamedTempFile::new_in(self.parent_dir()).map_err(|err| self.io_error(err))?;
        staged
            .write_all(&encoded)
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|err| self.io_error(err))?;
        staged
            .persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::in_working_dir()
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> StoreResult<Document> {
        let started_at = Instant::now();
        match self.read_document() {
            Ok(document) => {
                info!(
                    "event=store_load module=store status=ok path={} locations={} duration_ms={}",
                    self.path.display(),
                    document.locations.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(document)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_document(document) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok path={} locations={} duration_ms={}",
                    self.path.display(),
                    document.locations.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
