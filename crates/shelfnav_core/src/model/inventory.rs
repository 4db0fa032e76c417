//! Inventory document model.
//!
//! # Responsibility
//! - Define the canonical persisted shape of the inventory tree.
//! - Provide pure tree helpers (lookup, listing, auto-naming) with no I/O.
//!
//! # Invariants
//! - JSON shape is `{"locations": {L: {"shelves": {S: {N: {}}}}}}`.
//! - Nested shelf content and unknown keys on the document and locations are
//!   preserved verbatim across load/save.
//! - Mapping iteration order is insertion order.

use crate::model::name::{is_valid_name, NodeLevel};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root container persisted as one JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub locations: IndexMap<String, Location>,
    /// Top-level keys this crate does not interpret.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Top-level named container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub shelves: IndexMap<String, Shelf>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Named container inside one location.
///
/// Serialized as a bare mapping of nested shelf name to nested shelf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shelf {
    pub nested_shelves: IndexMap<String, NestedShelf>,
}

/// Leaf container, reserved for future item records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedShelf {
    pub items: IndexMap<String, Value>,
}

/// Fully qualified address of one nested shelf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShelfPath {
    pub location: String,
    pub shelf: String,
    pub nested_shelf: String,
}

impl std::fmt::Display for ShelfPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.location, self.shelf, self.nested_shelf)
    }
}

/// One blank name found while validating a loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankNameViolation {
    pub level: NodeLevel,
    /// Names of the ancestors of the offending node, root first.
    pub parents: Vec<String>,
}

impl Document {
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.locations.get_mut(name)
    }

    /// Location names in insertion order.
    pub fn location_names(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }

    pub fn shelf(&self, location: &str, shelf: &str) -> Option<&Shelf> {
        self.location(location)?.shelves.get(shelf)
    }

    pub fn shelf_mut(&mut self, location: &str, shelf: &str) -> Option<&mut Shelf> {
        self.location_mut(location)?.shelves.get_mut(shelf)
    }

    /// Finds the first blank name anywhere in the tree.
    ///
    /// Documents produced by this crate never contain one; hand-edited files can.
    pub fn find_blank_name(&self) -> Option<BlankNameViolation> {
        for (location_name, location) in &self.locations {
            if !is_valid_name(location_name) {
                return Some(BlankNameViolation {
                    level: NodeLevel::Location,
                    parents: Vec::new(),
                });
            }
            for (shelf_name, shelf) in &location.shelves {
                if !is_valid_name(shelf_name) {
                    return Some(BlankNameViolation {
                        level: NodeLevel::Shelf,
                        parents: vec![location_name.clone()],
                    });
                }
                if shelf.nested_shelves.keys().any(|name| !is_valid_name(name)) {
                    return Some(BlankNameViolation {
                        level: NodeLevel::NestedShelf,
                        parents: vec![location_name.clone(), shelf_name.clone()],
                    });
                }
            }
        }
        None
    }
}

impl Location {
    /// Shelf names in insertion order.
    pub fn shelf_names(&self) -> Vec<String> {
        self.shelves.keys().cloned().collect()
    }
}

impl Shelf {
    /// Nested shelf names in insertion order.
    pub fn nested_shelf_names(&self) -> Vec<String> {
        self.nested_shelves.keys().cloned().collect()
    }

    /// Returns `"{shelf_name}{N}"` for the smallest `N >= 1` not already taken.
    ///
    /// Gaps left by hand-edited or out-of-order names are filled first.
    pub fn next_nested_shelf_name(&self, shelf_name: &str) -> String {
        let mut suffix: u64 = 1;
        loop {
            let candidate = format!("{shelf_name}{suffix}");
            if !self.nested_shelves.contains_key(candidate.as_str()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
