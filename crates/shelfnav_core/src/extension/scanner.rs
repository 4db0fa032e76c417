//! Scanner capability contract.
//!
//! Camera/barcode hardware lives outside the core. A presentation layer hands
//! the core any `Scanner`; the core only consumes decoded codes.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One decoded code delivered by a scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedCode {
    pub value: String,
}

impl ScannedCode {
    /// Returns `None` for blank payloads.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            value: trimmed.to_string(),
        })
    }
}

/// Scanner failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Device missing, denied or disconnected.
    Unavailable(String),
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "scanner unavailable: {reason}"),
        }
    }
}

impl Error for ScanError {}

/// Source of scanned codes.
pub trait Scanner {
    /// Returns the next decoded code, or `None` when nothing was scanned.
    fn poll(&mut self) -> Result<Option<ScannedCode>, ScanError>;
}

/// Placeholder scanner that never decodes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScanner;

impl Scanner for NoopScanner {
    fn poll(&mut self) -> Result<Option<ScannedCode>, ScanError> {
        Ok(None)
    }
}
