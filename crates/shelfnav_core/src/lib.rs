//! Core domain logic for shelfnav.
//! This crate is the single source of truth for inventory tree invariants.

pub mod app;
pub mod config;
pub mod extension;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use app::command::{AppCommand, ScanReport, View};
pub use app::{AppError, AppResult, InventoryApp};
pub use config::AppConfig;
pub use extension::scanner::{NoopScanner, ScanError, ScannedCode, Scanner};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::inventory::{Document, Location, NestedShelf, Shelf, ShelfPath};
pub use model::name::{EmptyNameError, NodeLevel};
pub use service::hierarchy_service::{HierarchyError, HierarchyResult, HierarchyService};
pub use service::navigation::{Cursor, NavigationError, NavigationMode};
pub use service::order_service::{
    OrderIndex, OrderLookup, OrderLookupError, OrderRecord, UnindexedOrders,
};
pub use store::{
    DocumentStore, JsonFileStore, MemoryStore, StoreError, StoreResult, DEFAULT_DATA_FILE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
