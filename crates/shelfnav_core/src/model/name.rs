//! Node levels and name normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Depth of a node in the inventory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLevel {
    Location,
    Shelf,
    NestedShelf,
}

impl NodeLevel {
    /// Stable lowercase label used in messages and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Shelf => "shelf",
            Self::NestedShelf => "nested_shelf",
        }
    }
}

impl Display for NodeLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name rejected before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyNameError {
    pub level: NodeLevel,
}

impl Display for EmptyNameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} name must not be blank", self.level)
    }
}

impl Error for EmptyNameError {}

/// Form of user input used to address an existing node.
pub fn name_key(raw: &str) -> &str {
    raw.trim()
}

/// Trims user input and rejects blank names.
pub fn normalize_name(level: NodeLevel, raw: &str) -> Result<String, EmptyNameError> {
    let trimmed = name_key(raw);
    if trimmed.is_empty() {
        return Err(EmptyNameError { level });
    }
    Ok(trimmed.to_string())
}

/// Returns whether a stored name satisfies the non-blank invariant.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
