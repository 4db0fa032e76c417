//! Core use-case services.
//!
//! # Responsibility
//! - Enforce inventory tree rules above the store.
//! - Track navigation and order lookup state for the application layer.
//!
//! # Invariants
//! - Services never write files directly; persistence goes through `DocumentStore`.

pub mod hierarchy_service;
pub mod navigation;
pub mod order_service;
