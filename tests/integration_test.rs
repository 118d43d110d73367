/// End-to-end integration tests for devdash
///
/// These tests verify complete workflows: parsing → view resolution → session
mod common;

use common::realistic_catalog_json;
use devdash::{Catalog, ResolvedView, SessionStore, Theme, ViewState, favicon_url};
use tempfile::TempDir;

#[test]
fn test_e2e_parse_and_resolve_dashboard() {
    let catalog = Catalog::parse(&realistic_catalog_json()).unwrap();
    let state = ViewState::new();

    let screen = state.resolve(&catalog).unwrap();
    let ResolvedView::Dashboard(dashboard) = screen else {
        panic!("Default state should resolve to the dashboard");
    };

    assert!(!dashboard.filtering);
    assert_eq!(dashboard.sections.len(), 3, "One section per category");

    // Section order follows document order
    let ids: Vec<&str> = dashboard.sections.iter().map(|s| s.category_id).collect();
    assert_eq!(ids, vec!["learning", "tools", "databases"]);

    // Five learning resources but only four previewed
    let learning = &dashboard.sections[0];
    assert_eq!(learning.total_matches, 5);
    assert_eq!(learning.items.len(), 4);
    assert_eq!(learning.hidden_count(), 1);
    assert_eq!(learning.title, "Learning");
}

#[test]
fn test_e2e_search_then_open_category() {
    let catalog = Catalog::parse(&realistic_catalog_json()).unwrap();
    let mut state = ViewState::new();

    state.set_query("rust");
    let screen = state.resolve(&catalog).unwrap();
    let ResolvedView::Dashboard(dashboard) = screen else {
        panic!("No category selected yet");
    };
    assert!(dashboard.filtering);
    assert_eq!(dashboard.total_matches, 1);
    assert_eq!(dashboard.sections[0].items[0].display_name(), "The Rust Book");

    // Opening the category keeps the query active
    state.select_category(Some("learning"));
    let screen = state.resolve(&catalog).unwrap();
    let ResolvedView::Category(category) = screen else {
        panic!("Active category should resolve to the detail view");
    };
    assert!(category.filtering);
    assert_eq!(category.items.len(), 1);
    assert_eq!(category.total_in_category, 5);
    assert_eq!(category.title, "Learning");
}

#[test]
fn test_e2e_category_view_is_uncapped() {
    let catalog = Catalog::parse(&realistic_catalog_json()).unwrap();
    let mut state = ViewState::new();
    state.select_category(Some("learning"));

    let screen = state.resolve(&catalog).unwrap();
    let ResolvedView::Category(category) = screen else {
        panic!("Expected the category view");
    };

    assert_eq!(category.items.len(), 5, "Detail view shows every resource");
    assert!(!category.filtering);
}

#[test]
fn test_e2e_session_survives_store_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = SessionStore::open(dir.path().to_path_buf());
        store.set_username("octocat").unwrap();
        store.toggle_theme();
    }

    let store = SessionStore::open(dir.path().to_path_buf());
    assert!(store.is_logged_in());
    assert_eq!(store.username(), "octocat");
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn test_e2e_logout_clears_persisted_session() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = SessionStore::open(dir.path().to_path_buf());
        store.set_username("octocat").unwrap();
        store.toggle_theme();
        store.logout();
    }

    let store = SessionStore::open(dir.path().to_path_buf());
    assert!(!store.is_logged_in());
    assert_eq!(store.theme(), Theme::Light, "Logout resets the theme too");
}

#[test]
fn test_e2e_favicons_for_catalog_urls() {
    let catalog = Catalog::parse(&realistic_catalog_json()).unwrap();

    for (_, items) in catalog.iter() {
        for item in items {
            let icon = favicon_url(&item.url);
            let icon = icon.unwrap_or_else(|| panic!("No favicon for {}", item.url));
            assert!(icon.starts_with("https://www.google.com/s2/favicons?domain="));
            assert!(icon.ends_with("&sz=64"));
        }
    }
}

#[test]
fn test_e2e_embedded_catalog_resolves() {
    let catalog = Catalog::load_embedded().unwrap();
    let state = ViewState::new();

    let screen = state.resolve(&catalog).unwrap();
    let ResolvedView::Dashboard(dashboard) = screen else {
        panic!("Expected the dashboard");
    };

    assert!(!dashboard.sections.is_empty(), "Embedded catalog must not be empty");
    for section in &dashboard.sections {
        assert!(section.items.len() <= devdash::PREVIEW_LIMIT);
    }
}
