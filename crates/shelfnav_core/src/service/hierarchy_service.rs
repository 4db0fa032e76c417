//! Inventory hierarchy use-case service.
//!
//! # Responsibility
//! - Create, delete and list locations, shelves and nested shelves.
//! - Persist the whole document after every successful mutation.
//!
//! # Invariants
//! - Names are trimmed, non-blank and unique among siblings at every level.
//! - Deletes cascade to the whole subtree.
//! - A mutation whose save fails leaves the in-memory document unchanged.
//! - Nested shelves are only created through auto-naming and never overwrite.

use crate::model::inventory::{Document, Location, NestedShelf, Shelf};
use crate::model::name::{name_key, normalize_name, EmptyNameError, NodeLevel};
use crate::store::{DocumentStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Errors from hierarchy operations.
#[derive(Debug)]
pub enum HierarchyError {
    /// Name is blank after trim.
    EmptyName { level: NodeLevel },
    /// Sibling with the same name already exists.
    DuplicateName { level: NodeLevel, name: String },
    /// Addressed node does not exist.
    NotFound { level: NodeLevel, name: String },
    /// Persistence failure; the mutation was not applied.
    Store(StoreError),
}

impl Display for HierarchyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { level } => write!(f, "{level} name must not be blank"),
            Self::DuplicateName { level, name } => {
                write!(f, "{level} already exists: {name}")
            }
            Self::NotFound { level, name } => write!(f, "{level} not found: {name}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HierarchyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for HierarchyError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<EmptyNameError> for HierarchyError {
    fn from(value: EmptyNameError) -> Self {
        Self::EmptyName { level: value.level }
    }
}

impl HierarchyError {
    fn location_not_found(name: &str) -> Self {
        Self::NotFound {
            level: NodeLevel::Location,
            name: name.to_string(),
        }
    }

    fn shelf_not_found(location: &str, shelf: &str) -> Self {
        Self::NotFound {
            level: NodeLevel::Shelf,
            name: format!("{location}/{shelf}"),
        }
    }

    /// Whether this is a caller input problem rather than a storage failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

/// Hierarchy service over one loaded document and its store.
pub struct HierarchyService<S: DocumentStore> {
    store: S,
    document: Document,
}

impl<S: DocumentStore> HierarchyService<S> {
    /// Loads the document from `store`.
    pub fn open(store: S) -> HierarchyResult<Self> {
        let document = store.load()?;
        Ok(Self { store, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replaces the in-memory document with the persisted one.
    ///
    /// On failure the current document is kept.
    pub fn reload(&mut self) -> HierarchyResult<()> {
        self.document = self.store.load()?;
        Ok(())
    }

    /// Writes the current document to the store.
    pub fn persist(&self) -> HierarchyResult<()> {
        self.store.save(&self.document)?;
        Ok(())
    }

    /// Creates an empty location and returns its normalized name.
    pub fn create_location(&mut self, name: &str) -> HierarchyResult<String> {
        let name = normalize_name(NodeLevel::Location, name)?;
        if self.document.locations.contains_key(name.as_str()) {
            warn!("event=location_create module=hierarchy status=rejected reason=duplicate");
            return Err(HierarchyError::DuplicateName {
                level: NodeLevel::Location,
                name,
            });
        }

        self.mutate(|document| {
            document
                .locations
                .insert(name.clone(), Location::default());
            Ok(())
        })?;
        info!("event=location_create module=hierarchy status=ok location={name}");
        Ok(name)
    }

    /// Deletes a location with all its shelves and nested shelves.
    pub fn delete_location(&mut self, name: &str) -> HierarchyResult<()> {
        let name = name_key(name);
        self.mutate(|document| {
            document
                .locations
                .shift_remove(name)
                .map(|_| ())
                .ok_or_else(|| HierarchyError::location_not_found(name))
        })?;
        info!("event=location_delete module=hierarchy status=ok location={name}");
        Ok(())
    }

    /// Creates an empty shelf under `location` and returns its normalized name.
    pub fn create_shelf(&mut self, location: &str, name: &str) -> HierarchyResult<String> {
        let location = name_key(location);
        let name = normalize_name(NodeLevel::Shelf, name)?;
        let parent = self
            .document
            .location(location)
            .ok_or_else(|| HierarchyError::location_not_found(location))?;
        if parent.shelves.contains_key(name.as_str()) {
            warn!("event=shelf_create module=hierarchy status=rejected reason=duplicate");
            return Err(HierarchyError::DuplicateName {
                level: NodeLevel::Shelf,
                name,
            });
        }

        self.mutate(|document| {
            let parent = document
                .location_mut(location)
                .ok_or_else(|| HierarchyError::location_not_found(location))?;
            parent.shelves.insert(name.clone(), Shelf::default());
            Ok(())
        })?;
        info!("event=shelf_create module=hierarchy status=ok location={location} shelf={name}");
        Ok(name)
    }

    /// Deletes a shelf with all its nested shelves.
    pub fn delete_shelf(&mut self, location: &str, name: &str) -> HierarchyResult<()> {
        let (location, name) = (name_key(location), name_key(name));
        self.mutate(|document| {
            let parent = document
                .location_mut(location)
                .ok_or_else(|| HierarchyError::location_not_found(location))?;
            parent
                .shelves
                .shift_remove(name)
                .map(|_| ())
                .ok_or_else(|| HierarchyError::shelf_not_found(location, name))
        })?;
        info!("event=shelf_delete module=hierarchy status=ok location={location} shelf={name}");
        Ok(())
    }

    /// Creates the next auto-named nested shelf (`A1`, `A2`, ...) and returns its name.
    pub fn create_nested_shelf(&mut self, location: &str, shelf: &str) -> HierarchyResult<String> {
        let (location, shelf) = (name_key(location), name_key(shelf));
        let name = self
            .document
            .shelf(location, shelf)
            .ok_or_else(|| self.missing_shelf_error(location, shelf))?
            .next_nested_shelf_name(shelf);

        self.mutate(|document| {
            let parent = document
                .shelf_mut(location, shelf)
                .ok_or_else(|| HierarchyError::shelf_not_found(location, shelf))?;
            parent
                .nested_shelves
                .insert(name.clone(), NestedShelf::default());
            Ok(())
        })?;
        info!(
            "event=nested_shelf_create module=hierarchy status=ok location={location} shelf={shelf} nested_shelf={name}"
        );
        Ok(name)
    }

    /// Location names in insertion order.
    pub fn list_locations(&self) -> Vec<String> {
        self.document.location_names()
    }

    /// Shelf names of `location` in insertion order.
    pub fn list_shelves(&self, location: &str) -> HierarchyResult<Vec<String>> {
        let location = name_key(location);
        self.document
            .location(location)
            .map(Location::shelf_names)
            .ok_or_else(|| HierarchyError::location_not_found(location))
    }

    /// Nested shelf names of `location/shelf` in insertion order.
    pub fn list_nested_shelves(&self, location: &str, shelf: &str) -> HierarchyResult<Vec<String>> {
        let (location, shelf) = (name_key(location), name_key(shelf));
        self.document
            .shelf(location, shelf)
            .map(Shelf::nested_shelf_names)
            .ok_or_else(|| self.missing_shelf_error(location, shelf))
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.document.location(name_key(location)).is_some()
    }

    pub fn has_shelf(&self, location: &str, shelf: &str) -> bool {
        self.document.shelf(name_key(location), name_key(shelf)).is_some()
    }

    pub fn has_nested_shelf(&self, location: &str, shelf: &str, nested_shelf: &str) -> bool {
        self.document
            .shelf(name_key(location), name_key(shelf))
            .is_some_and(|parent| parent.nested_shelves.contains_key(name_key(nested_shelf)))
    }

    /// Reports the shallowest missing level for `location/shelf`.
    fn missing_shelf_error(&self, location: &str, shelf: &str) -> HierarchyError {
        if self.has_location(location) {
            HierarchyError::shelf_not_found(location, shelf)
        } else {
            HierarchyError::location_not_found(location)
        }
    }

    /// Applies `change` to a copy, saves the copy, then swaps it in.
    fn mutate<F>(&mut self, change: F) -> HierarchyResult<()>
    where
        F: FnOnce(&mut Document) -> HierarchyResult<()>,
    {
        let mut next = self.document.clone();
        change(&mut next)?;
        self.store.save(&next)?;
        self.document = next;
        Ok(())
    }
}
