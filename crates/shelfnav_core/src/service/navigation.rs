//! Navigation cursor over the inventory tree.
//!
//! # Responsibility
//! - Track the location, shelf and nested shelf the user has descended into.
//!
//! # Invariants
//! - A deeper slot is only set while every shallower slot is set.
//! - Changing or clearing a slot clears every deeper slot.
//! - The cursor does not check names against the document; callers do.

use crate::model::inventory::ShelfPath;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from cursor transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Shelf-level action without a current location.
    NoLocationSelected,
    /// Nested-shelf-level action without a current shelf.
    NoShelfSelected,
    /// Scan accepted while no nested shelf is open.
    NotScanning,
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLocationSelected => write!(f, "no location selected"),
            Self::NoShelfSelected => write!(f, "no shelf selected"),
            Self::NotScanning => write!(f, "no nested shelf open for scanning"),
        }
    }
}

impl Error for NavigationError {}

/// Depth the cursor currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Nothing selected.
    Home,
    /// Inside one location, browsing its shelves.
    Location,
    /// Inside one shelf, browsing its nested shelves.
    Shelf,
    /// Nested shelf open; scanned codes target it.
    Scanning,
}

/// Three-slot navigation cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    location: Option<String>,
    shelf: Option<String>,
    nested_shelf: Option<String>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn shelf(&self) -> Option<&str> {
        self.shelf.as_deref()
    }

    pub fn nested_shelf(&self) -> Option<&str> {
        self.nested_shelf.as_deref()
    }

    pub fn mode(&self) -> NavigationMode {
        match (&self.location, &self.shelf, &self.nested_shelf) {
            (Some(_), Some(_), Some(_)) => NavigationMode::Scanning,
            (Some(_), Some(_), None) => NavigationMode::Shelf,
            (Some(_), None, _) => NavigationMode::Location,
            (None, _, _) => NavigationMode::Home,
        }
    }

    /// Current location, or `NoLocationSelected`.
    pub fn require_location(&self) -> Result<&str, NavigationError> {
        self.location().ok_or(NavigationError::NoLocationSelected)
    }

    /// Current `(location, shelf)`, or the shallowest missing slot.
    pub fn require_shelf(&self) -> Result<(&str, &str), NavigationError> {
        let location = self.require_location()?;
        let shelf = self.shelf().ok_or(NavigationError::NoShelfSelected)?;
        Ok((location, shelf))
    }

    /// Full address of the nested shelf being scanned into.
    pub fn scan_target(&self) -> Result<ShelfPath, NavigationError> {
        match (&self.location, &self.shelf, &self.nested_shelf) {
            (Some(location), Some(shelf), Some(nested_shelf)) => Ok(ShelfPath {
                location: location.clone(),
                shelf: shelf.clone(),
                nested_shelf: nested_shelf.clone(),
            }),
            _ => Err(NavigationError::NotScanning),
        }
    }

    /// Enters `location`, clearing shelf and nested shelf.
    pub fn select_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
        self.shelf = None;
        self.nested_shelf = None;
    }

    /// Enters `shelf` of the current location, clearing nested shelf.
    pub fn select_shelf(&mut self, shelf: impl Into<String>) -> Result<(), NavigationError> {
        self.require_location()?;
        self.shelf = Some(shelf.into());
        self.nested_shelf = None;
        Ok(())
    }

    /// Opens `nested_shelf` of the current shelf for scanning.
    pub fn select_nested_shelf(
        &mut self,
        nested_shelf: impl Into<String>,
    ) -> Result<(), NavigationError> {
        self.require_shelf()?;
        self.nested_shelf = Some(nested_shelf.into());
        Ok(())
    }

    /// Clears the deepest set slot. Returns `false` when already at home.
    pub fn back(&mut self) -> bool {
        if self.nested_shelf.take().is_some() {
            return true;
        }
        if self.shelf.take().is_some() {
            return true;
        }
        self.location.take().is_some()
    }

    /// Clears every slot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clears slots that referenced a deleted location.
    ///
    /// Returns whether the cursor changed.
    pub fn forget_location(&mut self, location: &str) -> bool {
        if self.location.as_deref() == Some(location) {
            self.reset();
            return true;
        }
        false
    }

    /// Clears slots that referenced a deleted shelf.
    ///
    /// Returns whether the cursor changed.
    pub fn forget_shelf(&mut self, location: &str, shelf: &str) -> bool {
        if self.location.as_deref() == Some(location) && self.shelf.as_deref() == Some(shelf) {
            self.shelf = None;
            self.nested_shelf = None;
            return true;
        }
        false
    }
}
