//! Application state and command dispatch.
//!
//! # Responsibility
//! - Own the loaded document, navigation cursor and order lookup as one value.
//! - Translate user intents (`AppCommand`) into service calls and next views.
//!
//! # Invariants
//! - Cursor slots always reference nodes that exist in the document.
//! - Every deletion clears cursor slots that referenced the deleted subtree.
//! - A failed command leaves both document and cursor unchanged.
//!
//! # Lifecycle
//! - `open` loads the document at startup; `shutdown` persists it once more.

pub mod command;

use crate::extension::scanner::{ScanError, Scanner};
use crate::model::name::{name_key, NodeLevel};
use crate::service::hierarchy_service::{HierarchyError, HierarchyService};
use crate::service::navigation::{Cursor, NavigationError, NavigationMode};
use crate::service::order_service::{OrderIndex, OrderLookup, OrderLookupError, UnindexedOrders};
use crate::store::DocumentStore;
use command::{AppCommand, ScanReport, View};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

/// Any error surfaced to a presentation layer.
#[derive(Debug)]
pub enum AppError {
    Hierarchy(HierarchyError),
    Navigation(NavigationError),
    Order(OrderLookupError),
    Scan(ScanError),
}

impl AppError {
    /// Whether the error comes from user input and should be shown as a message.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Hierarchy(err) => err.is_validation(),
            Self::Navigation(_) | Self::Order(_) => true,
            Self::Scan(_) => false,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hierarchy(err) => write!(f, "{err}"),
            Self::Navigation(err) => write!(f, "{err}"),
            Self::Order(err) => write!(f, "{err}"),
            Self::Scan(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Hierarchy(err) => Some(err),
            Self::Navigation(err) => Some(err),
            Self::Order(err) => Some(err),
            Self::Scan(err) => Some(err),
        }
    }
}

impl From<HierarchyError> for AppError {
    fn from(value: HierarchyError) -> Self {
        Self::Hierarchy(value)
    }
}

impl From<NavigationError> for AppError {
    fn from(value: NavigationError) -> Self {
        Self::Navigation(value)
    }
}

impl From<OrderLookupError> for AppError {
    fn from(value: OrderLookupError) -> Self {
        Self::Order(value)
    }
}

impl From<ScanError> for AppError {
    fn from(value: ScanError) -> Self {
        Self::Scan(value)
    }
}

/// Inventory application state.
pub struct InventoryApp<S: DocumentStore, I: OrderIndex = UnindexedOrders> {
    hierarchy: HierarchyService<S>,
    cursor: Cursor,
    orders: OrderLookup<I>,
}

impl<S: DocumentStore> InventoryApp<S> {
    /// Loads the document with no order index behind order search.
    pub fn open(store: S) -> AppResult<Self> {
        Self::open_with_index(store, UnindexedOrders)
    }
}

impl<S: DocumentStore, I: OrderIndex> InventoryApp<S, I> {
    pub fn open_with_index(store: S, index: I) -> AppResult<Self> {
        let hierarchy = HierarchyService::open(store)?;
        info!(
            "event=app_open module=app status=ok locations={}",
            hierarchy.document().locations.len()
        );
        Ok(Self {
            hierarchy,
            cursor: Cursor::new(),
            orders: OrderLookup::new(index),
        })
    }

    pub fn hierarchy(&self) -> &HierarchyService<S> {
        &self.hierarchy
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Applies one user intent and returns the view to render next.
    pub fn dispatch(&mut self, command: AppCommand) -> AppResult<View> {
        let command_name = command.name();
        let result = self.apply(command);
        match &result {
            Ok(_) => debug!("event=command module=app status=ok command={command_name}"),
            Err(err) => warn!(
                "event=command module=app status=error command={command_name} validation={} error={err}",
                err.is_validation()
            ),
        }
        result
    }

    /// View matching the current cursor position.
    ///
    /// At home this is the location list.
    pub fn current_view(&self) -> AppResult<View> {
        let view = match self.cursor.mode() {
            NavigationMode::Home => View::Locations {
                locations: self.hierarchy.list_locations(),
            },
            NavigationMode::Location => {
                let location = self.cursor.require_location()?;
                View::Shelves {
                    location: location.to_string(),
                    shelves: self.hierarchy.list_shelves(location)?,
                }
            }
            NavigationMode::Shelf => {
                let (location, shelf) = self.cursor.require_shelf()?;
                View::NestedShelves {
                    location: location.to_string(),
                    shelf: shelf.to_string(),
                    nested_shelves: self.hierarchy.list_nested_shelves(location, shelf)?,
                }
            }
            NavigationMode::Scanning => View::Scanning {
                target: self.cursor.scan_target()?,
            },
        };
        Ok(view)
    }

    /// Creates a location without moving the cursor.
    pub fn create_location(&mut self, name: &str) -> AppResult<String> {
        Ok(self.hierarchy.create_location(name)?)
    }

    /// Creates a shelf without moving the cursor.
    pub fn create_shelf(&mut self, location: &str, name: &str) -> AppResult<String> {
        Ok(self.hierarchy.create_shelf(location, name)?)
    }

    /// Creates the next auto-named nested shelf without moving the cursor.
    pub fn create_nested_shelf(&mut self, location: &str, shelf: &str) -> AppResult<String> {
        Ok(self.hierarchy.create_nested_shelf(location, shelf)?)
    }

    /// Deletes a location by name and clears cursor slots that pointed into it.
    pub fn delete_location(&mut self, location: &str) -> AppResult<()> {
        let location = name_key(location);
        self.hierarchy.delete_location(location)?;
        if self.cursor.forget_location(location) {
            debug!("event=cursor_cleared module=app level=location");
        }
        Ok(())
    }

    /// Deletes a shelf by name and clears cursor slots that pointed into it.
    pub fn delete_shelf(&mut self, location: &str, shelf: &str) -> AppResult<()> {
        let (location, shelf) = (name_key(location), name_key(shelf));
        self.hierarchy.delete_shelf(location, shelf)?;
        if self.cursor.forget_shelf(location, shelf) {
            debug!("event=cursor_cleared module=app level=shelf");
        }
        Ok(())
    }

    /// Polls `scanner` once for the nested shelf currently open.
    ///
    /// Codes are reported, not stored; item records are not modeled yet.
    pub fn accept_scan(&mut self, scanner: &mut dyn Scanner) -> AppResult<ScanReport> {
        let target = self.cursor.scan_target()?;
        match scanner.poll()? {
            None => Ok(ScanReport::Idle),
            Some(code) => {
                info!(
                    "event=scan_captured module=app status=ok target={target} code_len={}",
                    code.value.len()
                );
                Ok(ScanReport::Captured { target, code })
            }
        }
    }

    /// Persists the document one last time and drops the application state.
    pub fn shutdown(self) -> AppResult<()> {
        self.hierarchy.persist()?;
        info!("event=app_shutdown module=app status=ok");
        Ok(())
    }

    fn apply(&mut self, command: AppCommand) -> AppResult<View> {
        match command {
            AppCommand::ShowLocations => {
                self.cursor.reset();
                self.current_view()
            }
            AppCommand::CreateLocation(name) => {
                let location = self.create_location(&name)?;
                self.cursor.select_location(location);
                self.current_view()
            }
            AppCommand::SelectLocation(name) => {
                let name = name_key(&name).to_string();
                if !self.hierarchy.has_location(&name) {
                    return Err(not_found(NodeLevel::Location, name).into());
                }
                self.cursor.select_location(name);
                self.current_view()
            }
            AppCommand::DeleteCurrentLocation => {
                let location = self.cursor.require_location()?.to_string();
                self.delete_location(&location)?;
                self.current_view()
            }
            AppCommand::CreateShelf(name) => {
                let location = self.cursor.require_location()?.to_string();
                let shelf = self.create_shelf(&location, &name)?;
                self.cursor.select_shelf(shelf)?;
                self.current_view()
            }
            AppCommand::SelectShelf(name) => {
                let name = name_key(&name).to_string();
                let location = self.cursor.require_location()?;
                if !self.hierarchy.has_shelf(location, &name) {
                    return Err(not_found(NodeLevel::Shelf, format!("{location}/{name}")).into());
                }
                self.cursor.select_shelf(name)?;
                self.current_view()
            }
            AppCommand::DeleteCurrentShelf => {
                let (location, shelf) = self.cursor.require_shelf()?;
                let (location, shelf) = (location.to_string(), shelf.to_string());
                self.delete_shelf(&location, &shelf)?;
                self.current_view()
            }
            AppCommand::CreateNestedShelf => {
                let (location, shelf) = self.cursor.require_shelf()?;
                let (location, shelf) = (location.to_string(), shelf.to_string());
                self.create_nested_shelf(&location, &shelf)?;
                self.cursor.select_shelf(shelf)?;
                self.current_view()
            }
            AppCommand::SelectNestedShelf(name) => {
                let name = name_key(&name).to_string();
                let (location, shelf) = self.cursor.require_shelf()?;
                if !self.hierarchy.has_nested_shelf(location, shelf, &name) {
                    return Err(not_found(
                        NodeLevel::NestedShelf,
                        format!("{location}/{shelf}/{name}"),
                    )
                    .into());
                }
                self.cursor.select_nested_shelf(name)?;
                let view = self.current_view()?;
                if let View::Scanning { target } = &view {
                    info!("event=scanning_start module=app status=ok target={target}");
                }
                Ok(view)
            }
            AppCommand::SearchOrder(order_id) => {
                Ok(View::Order(self.orders.search_order(&order_id)?))
            }
            AppCommand::Back => {
                self.cursor.back();
                self.current_view()
            }
            AppCommand::Close => {
                self.cursor.reset();
                Ok(View::Home)
            }
        }
    }
}

fn not_found(level: NodeLevel, name: impl Into<String>) -> HierarchyError {
    HierarchyError::NotFound {
        level,
        name: name.into(),
    }
}
