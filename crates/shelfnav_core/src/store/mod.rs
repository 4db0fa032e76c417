//! Document persistence boundary.
//!
//! # Responsibility
//! - Load and save the whole inventory document.
//! - Keep file format details out of the hierarchy service.
//!
//! # Invariants
//! - A missing backing file loads as an empty document.
//! - Malformed or invalid content fails fast and is never overwritten on load.
//! - `save` always writes the complete document; there is no partial write API.
//!
//! # Known limitations
//! - The backing file is not locked. Two processes sharing one file race on save.

use crate::model::inventory::Document;
use crate::model::name::NodeLevel;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, DEFAULT_DATA_FILE};
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-layer error.
#[derive(Debug)]
pub enum StoreError {
    /// Reading, writing or renaming the backing file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file exists but is not a valid inventory JSON document.
    Malformed { path: PathBuf, message: String },
    /// Document parsed but violates a tree invariant.
    InvalidDocument { path: PathBuf, message: String },
    /// Document could not be encoded.
    Serialize(serde_json::Error),
    /// Store was configured to refuse writes.
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn blank_name(path: PathBuf, level: NodeLevel, parents: &[String]) -> Self {
        let message = if parents.is_empty() {
            format!("blank {level} name at document root")
        } else {
            format!("blank {level} name under `{}`", parents.join("/"))
        };
        Self::InvalidDocument { path, message }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Malformed { path, message } => {
                write!(f, "malformed inventory file `{}`: {message}", path.display())
            }
            Self::InvalidDocument { path, message } => {
                write!(f, "invalid inventory file `{}`: {message}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to encode inventory: {err}"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::Malformed { .. } => None,
            Self::InvalidDocument { .. } => None,
            Self::Unavailable(_) => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-document persistence contract.
pub trait DocumentStore {
    /// Loads the persisted document, or an empty one when nothing is persisted.
    fn load(&self) -> StoreResult<Document>;
    /// Replaces the persisted document with `document`.
    fn save(&self, document: &Document) -> StoreResult<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn load(&self) -> StoreResult<Document> {
        (**self).load()
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        (**self).save(document)
    }
}
