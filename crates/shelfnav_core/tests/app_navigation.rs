use shelfnav_core::{
    AppCommand, AppError, HierarchyError, InventoryApp, MemoryStore, NavigationError,
    NavigationMode, NodeLevel, NoopScanner, OrderIndex, OrderLookupError, OrderRecord, ScanError,
    ScanReport, ScannedCode, Scanner, ShelfPath, View,
};

fn setup(store: &MemoryStore) -> InventoryApp<&MemoryStore> {
    InventoryApp::open(store).unwrap()
}

fn enter_scanning(app: &mut InventoryApp<&MemoryStore>) {
    app.dispatch(AppCommand::CreateLocation("Warehouse".to_string()))
        .unwrap();
    app.dispatch(AppCommand::CreateShelf("A".to_string())).unwrap();
    app.dispatch(AppCommand::CreateNestedShelf).unwrap();
    app.dispatch(AppCommand::SelectNestedShelf("A1".to_string()))
        .unwrap();
}

struct FixedScanner(Option<&'static str>);

impl Scanner for FixedScanner {
    fn poll(&mut self) -> Result<Option<ScannedCode>, ScanError> {
        Ok(self.0.take().and_then(ScannedCode::new))
    }
}

struct BrokenScanner;

impl Scanner for BrokenScanner {
    fn poll(&mut self) -> Result<Option<ScannedCode>, ScanError> {
        Err(ScanError::Unavailable("camera permission denied".to_string()))
    }
}

#[test]
fn fresh_app_shows_empty_location_list() {
    let store = MemoryStore::new();
    let mut app = setup(&store);

    assert_eq!(app.cursor().mode(), NavigationMode::Home);
    let view = app.dispatch(AppCommand::ShowLocations).unwrap();
    assert_eq!(view, View::Locations { locations: vec![] });
}

#[test]
fn create_location_enters_it() {
    let store = MemoryStore::new();
    let mut app = setup(&store);

    let view = app
        .dispatch(AppCommand::CreateLocation(" Warehouse ".to_string()))
        .unwrap();
    assert_eq!(
        view,
        View::Shelves {
            location: "Warehouse".to_string(),
            shelves: vec![],
        }
    );
    assert_eq!(app.cursor().location(), Some("Warehouse"));
}

#[test]
fn full_descent_reaches_scanning_mode() {
    let store = MemoryStore::new();
    let mut app = setup(&store);

    app.dispatch(AppCommand::CreateLocation("Warehouse".to_string()))
        .unwrap();
    let view = app.dispatch(AppCommand::CreateShelf("A".to_string())).unwrap();
    assert_eq!(
        view,
        View::NestedShelves {
            location: "Warehouse".to_string(),
            shelf: "A".to_string(),
            nested_shelves: vec![],
        }
    );

    app.dispatch(AppCommand::CreateNestedShelf).unwrap();
    let view = app.dispatch(AppCommand::CreateNestedShelf).unwrap();
    assert_eq!(
        view,
        View::NestedShelves {
            location: "Warehouse".to_string(),
            shelf: "A".to_string(),
            nested_shelves: vec!["A1".to_string(), "A2".to_string()],
        }
    );

    let view = app
        .dispatch(AppCommand::SelectNestedShelf("A2".to_string()))
        .unwrap();
    assert_eq!(
        view,
        View::Scanning {
            target: ShelfPath {
                location: "Warehouse".to_string(),
                shelf: "A".to_string(),
                nested_shelf: "A2".to_string(),
            }
        }
    );
    assert_eq!(app.cursor().mode(), NavigationMode::Scanning);
}

#[test]
fn failed_commands_leave_cursor_unchanged() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    app.dispatch(AppCommand::CreateLocation("Warehouse".to_string()))
        .unwrap();
    let before = app.cursor().clone();

    let err = app
        .dispatch(AppCommand::CreateLocation("Warehouse".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Hierarchy(HierarchyError::DuplicateName { .. })
    ));
    let err = app
        .dispatch(AppCommand::SelectShelf("Ghost".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Hierarchy(HierarchyError::NotFound {
            level: NodeLevel::Shelf,
            ..
        })
    ));
    let err = app
        .dispatch(AppCommand::SelectLocation("Ghost".to_string()))
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(*app.cursor(), before);
}

#[test]
fn shelf_commands_require_a_current_location() {
    let store = MemoryStore::new();
    let mut app = setup(&store);

    let err = app
        .dispatch(AppCommand::CreateShelf("A".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Navigation(NavigationError::NoLocationSelected)
    ));
    let err = app.dispatch(AppCommand::CreateNestedShelf).unwrap_err();
    assert!(matches!(
        err,
        AppError::Navigation(NavigationError::NoLocationSelected)
    ));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn deleting_current_location_clears_cursor() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    enter_scanning(&mut app);

    app.dispatch(AppCommand::DeleteCurrentShelf).unwrap();
    app.dispatch(AppCommand::SelectShelf("A".to_string()))
        .unwrap_err();

    let view = app.dispatch(AppCommand::DeleteCurrentLocation).unwrap();
    assert_eq!(view, View::Locations { locations: vec![] });
    assert_eq!(app.cursor().mode(), NavigationMode::Home);
    assert!(app.hierarchy().list_locations().is_empty());
}

#[test]
fn deleting_current_shelf_returns_to_shelf_list() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    enter_scanning(&mut app);

    let view = app.dispatch(AppCommand::DeleteCurrentShelf).unwrap();
    assert_eq!(
        view,
        View::Shelves {
            location: "Warehouse".to_string(),
            shelves: vec![],
        }
    );
    assert_eq!(app.cursor().location(), Some("Warehouse"));
    assert_eq!(app.cursor().shelf(), None);
    assert_eq!(app.cursor().nested_shelf(), None);
}

#[test]
fn named_deletes_clear_cursor_when_they_hit_the_current_path() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    enter_scanning(&mut app);

    app.delete_shelf("Warehouse", "A").unwrap();
    assert_eq!(app.cursor().mode(), NavigationMode::Location);

    app.dispatch(AppCommand::CreateLocation("Garage".to_string()))
        .unwrap();
    app.delete_location("Warehouse").unwrap();
    assert_eq!(app.cursor().location(), Some("Garage"));

    app.delete_location("Garage").unwrap();
    assert_eq!(app.cursor().mode(), NavigationMode::Home);
}

#[test]
fn padded_names_select_and_delete_the_stored_node() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    app.dispatch(AppCommand::CreateLocation(" Warehouse ".to_string()))
        .unwrap();
    app.dispatch(AppCommand::Close).unwrap();

    app.dispatch(AppCommand::SelectLocation("Warehouse  ".to_string()))
        .unwrap();
    assert_eq!(app.cursor().location(), Some("Warehouse"));

    app.delete_location(" Warehouse").unwrap();
    assert_eq!(app.cursor().location(), None);
    assert!(app.hierarchy().list_locations().is_empty());
}

#[test]
fn back_and_close_move_up_the_tree() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    enter_scanning(&mut app);

    let view = app.dispatch(AppCommand::Back).unwrap();
    assert!(matches!(view, View::NestedShelves { .. }));
    let view = app.dispatch(AppCommand::Back).unwrap();
    assert!(matches!(view, View::Shelves { .. }));
    let view = app.dispatch(AppCommand::Back).unwrap();
    assert_eq!(
        view,
        View::Locations {
            locations: vec!["Warehouse".to_string()]
        }
    );

    app.dispatch(AppCommand::SelectLocation("Warehouse".to_string()))
        .unwrap();
    assert_eq!(app.dispatch(AppCommand::Close).unwrap(), View::Home);
    assert_eq!(app.cursor().mode(), NavigationMode::Home);
}

#[test]
fn create_nested_shelf_while_scanning_returns_to_shelf_view() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    enter_scanning(&mut app);

    let view = app.dispatch(AppCommand::CreateNestedShelf).unwrap();
    assert_eq!(
        view,
        View::NestedShelves {
            location: "Warehouse".to_string(),
            shelf: "A".to_string(),
            nested_shelves: vec!["A1".to_string(), "A2".to_string()],
        }
    );
    assert_eq!(app.cursor().mode(), NavigationMode::Shelf);
}

#[test]
fn search_order_validates_input_and_reports_missing_orders() {
    let store = MemoryStore::new();
    let mut app = setup(&store);

    let err = app
        .dispatch(AppCommand::SearchOrder("  ".to_string()))
        .unwrap_err();
    assert!(matches!(err, AppError::Order(OrderLookupError::EmptyOrderId)));

    let err = app
        .dispatch(AppCommand::SearchOrder("SO-42".to_string()))
        .unwrap_err();
    assert!(matches!(err, AppError::Order(OrderLookupError::NotFound(ref id)) if id == "SO-42"));
}

#[test]
fn search_order_uses_supplied_index() {
    struct OneOrder;

    impl OrderIndex for OneOrder {
        fn find(&self, order_id: &str) -> Option<OrderRecord> {
            Some(OrderRecord {
                order_id: order_id.to_string(),
                shelf: None,
            })
        }
    }

    let store = MemoryStore::new();
    let mut app = InventoryApp::open_with_index(&store, OneOrder).unwrap();
    let view = app
        .dispatch(AppCommand::SearchOrder("SO-7".to_string()))
        .unwrap();
    assert_eq!(
        view,
        View::Order(OrderRecord {
            order_id: "SO-7".to_string(),
            shelf: None,
        })
    );
}

#[test]
fn accept_scan_requires_scanning_mode() {
    let store = MemoryStore::new();
    let mut app = setup(&store);

    let err = app.accept_scan(&mut NoopScanner).unwrap_err();
    assert!(matches!(
        err,
        AppError::Navigation(NavigationError::NotScanning)
    ));
}

#[test]
fn accept_scan_reports_codes_for_open_nested_shelf() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    enter_scanning(&mut app);
    let saves_before = store.save_count();

    assert_eq!(app.accept_scan(&mut NoopScanner).unwrap(), ScanReport::Idle);

    let mut scanner = FixedScanner(Some("4006381333931"));
    match app.accept_scan(&mut scanner).unwrap() {
        ScanReport::Captured { target, code } => {
            assert_eq!(target.to_string(), "Warehouse/A/A1");
            assert_eq!(code.value, "4006381333931");
        }
        other => panic!("unexpected scan report: {other:?}"),
    }
    assert_eq!(app.accept_scan(&mut scanner).unwrap(), ScanReport::Idle);
    assert_eq!(store.save_count(), saves_before);

    let err = app.accept_scan(&mut BrokenScanner).unwrap_err();
    assert!(matches!(err, AppError::Scan(ScanError::Unavailable(_))));
    assert!(!err.is_validation());
}

#[test]
fn shutdown_persists_document() {
    let store = MemoryStore::new();
    let mut app = setup(&store);
    app.dispatch(AppCommand::CreateLocation("Warehouse".to_string()))
        .unwrap();
    let saves_before = store.save_count();

    app.shutdown().unwrap();
    assert_eq!(store.save_count(), saves_before + 1);
    assert!(store.snapshot().unwrap().location("Warehouse").is_some());
}
