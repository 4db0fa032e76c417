//! Inventory domain model.
//!
//! # Responsibility
//! - Define the persisted Location -> Shelf -> Nested Shelf tree.
//! - Own naming rules shared by every layer above.
//!
//! # Invariants
//! - The tree is exactly three levels deep below the document root.
//! - Sibling names are unique, trimmed and never blank.
//! - Mapping order is insertion order.

pub mod inventory;
pub mod name;
