//! Capability contracts for devices the core does not own.
//!
//! Only scanning is defined. Concrete camera implementations belong to the
//! presentation layer.

pub mod scanner;
