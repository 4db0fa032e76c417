//! In-memory store for tests and embedding.

use super::{DocumentStore, StoreError, StoreResult};
use crate::model::inventory::Document;
use std::cell::{Cell, RefCell};

/// Store keeping the last saved document in memory.
///
/// Can be switched into a failing mode to exercise persistence error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Document>>,
    save_count: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that loads `document` as if it had been persisted earlier.
    pub fn with_document(document: Document) -> Self {
        Self {
            saved: RefCell::new(Some(document)),
            ..Self::default()
        }
    }

    /// Last successfully saved (or seeded) document.
    pub fn snapshot(&self) -> Option<Document> {
        self.saved.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// When `true`, every subsequent `save` fails with `StoreError::Unavailable`.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StoreResult<Document> {
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        if self.fail_saves.get() {
            return Err(StoreError::Unavailable(
                "memory store is rejecting writes".to_string(),
            ));
        }
        *self.saved.borrow_mut() = Some(document.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
