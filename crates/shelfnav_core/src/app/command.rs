//! User intents and the views they lead to.

use crate::extension::scanner::ScannedCode;
use crate::model::inventory::ShelfPath;
use crate::service::order_service::OrderRecord;

/// One user intent forwarded by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Go to the location list.
    ShowLocations,
    CreateLocation(String),
    SelectLocation(String),
    DeleteCurrentLocation,
    /// Create a shelf in the current location.
    CreateShelf(String),
    SelectShelf(String),
    DeleteCurrentShelf,
    /// Auto-name a nested shelf in the current shelf.
    CreateNestedShelf,
    /// Open a nested shelf of the current shelf for scanning.
    SelectNestedShelf(String),
    SearchOrder(String),
    /// Go up one level.
    Back,
    /// Leave all menus.
    Close,
}

impl AppCommand {
    /// Stable snake_case name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowLocations => "show_locations",
            Self::CreateLocation(_) => "create_location",
            Self::SelectLocation(_) => "select_location",
            Self::DeleteCurrentLocation => "delete_current_location",
            Self::CreateShelf(_) => "create_shelf",
            Self::SelectShelf(_) => "select_shelf",
            Self::DeleteCurrentShelf => "delete_current_shelf",
            Self::CreateNestedShelf => "create_nested_shelf",
            Self::SelectNestedShelf(_) => "select_nested_shelf",
            Self::SearchOrder(_) => "search_order",
            Self::Back => "back",
            Self::Close => "close",
        }
    }
}

/// Screen a presentation layer should render next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Start screen, nothing selected.
    Home,
    Locations {
        locations: Vec<String>,
    },
    Shelves {
        location: String,
        shelves: Vec<String>,
    },
    NestedShelves {
        location: String,
        shelf: String,
        nested_shelves: Vec<String>,
    },
    /// Nested shelf open; scanned codes target it.
    Scanning {
        target: ShelfPath,
    },
    Order(OrderRecord),
}

/// Outcome of accepting one scan while a nested shelf is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanReport {
    /// Scanner produced nothing.
    Idle,
    Captured {
        target: ShelfPath,
        code: ScannedCode,
    },
}
