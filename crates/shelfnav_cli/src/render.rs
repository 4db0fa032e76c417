//! Plain-text rendering of core views.

use shelfnav_core::{Document, ScanReport, View};
use std::fmt::Write;

pub fn render_view(view: &View) -> String {
    match view {
        View::Home => "Home. Type `ls` to list locations or `find <order id>`.".to_string(),
        View::Locations { locations } => render_list("Locations", locations, "no locations yet"),
        View::Shelves { location, shelves } => {
            render_list(&format!("Shelves in {location}"), shelves, "no shelves yet")
        }
        View::NestedShelves {
            shelf,
            nested_shelves,
            ..
        } => render_list(
            &format!("Nested shelves in {shelf}"),
            nested_shelves,
            "no nested shelves yet",
        ),
        View::Scanning { target } => format!("Now scanning items on shelf {}", target.nested_shelf),
        View::Order(record) => match &record.shelf {
            Some(path) => format!("Order {} is on {path}", record.order_id),
            None => format!("Order {} found", record.order_id),
        },
    }
}

pub fn render_scan(report: &ScanReport) -> String {
    match report {
        ScanReport::Idle => "No code scanned.".to_string(),
        ScanReport::Captured { target, code } => {
            format!("Scanned {} into {target}", code.value)
        }
    }
}

/// Indented outline of the whole document.
pub fn render_tree(document: &Document) -> String {
    if document.locations.is_empty() {
        return "(empty inventory)".to_string();
    }
    let mut out = String::new();
    for (location_name, location) in &document.locations {
        let _ = writeln!(out, "{location_name}");
        for (shelf_name, shelf) in &location.shelves {
            let _ = writeln!(out, "  {shelf_name}");
            for nested_name in shelf.nested_shelves.keys() {
                let _ = writeln!(out, "    {nested_name}");
            }
        }
    }
    out.trim_end().to_string()
}

fn render_list(title: &str, names: &[String], empty: &str) -> String {
    if names.is_empty() {
        return format!("{title}: ({empty})");
    }
    let mut out = format!("{title}:");
    for name in names {
        let _ = write!(out, "\n  - {name}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_tree, render_view};
    use shelfnav_core::{Document, View};

    #[test]
    fn renders_lists_and_empty_states() {
        let view = View::Shelves {
            location: "Warehouse".to_string(),
            shelves: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(render_view(&view), "Shelves in Warehouse:\n  - A\n  - B");

        let view = View::Locations { locations: vec![] };
        assert_eq!(render_view(&view), "Locations: (no locations yet)");
    }

    #[test]
    fn renders_tree_outline_in_insertion_order() {
        let document: Document = serde_json::from_str(
            r#"{"locations":{"W":{"shelves":{"B":{},"A":{"A1":{}}}},"G":{"shelves":{}}}}"#,
        )
        .expect("parse");
        assert_eq!(render_tree(&document), "W\n  B\n  A\n    A1\nG");
        assert_eq!(render_tree(&Document::default()), "(empty inventory)");
    }
}
