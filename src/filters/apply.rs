use indexmap::IndexMap;

use super::query::NormalizedQuery;
use crate::models::{Catalog, ResourceItem};

/// Result of filtering a catalog: surviving categories mapped to their
/// surviving items, borrowed from the catalog and in catalog order.
///
/// Filtering never copies or reorders resources; entries are references into
/// the source `Catalog`, so two recomputations over the same catalog yield
/// views over the same underlying items.
#[derive(Debug, Default, PartialEq)]
pub struct FilteredView<'a> {
    categories: IndexMap<&'a str, Vec<&'a ResourceItem>>,
}

impl<'a> FilteredView<'a> {
    /// Surviving items for one category, or `None` when the category did not
    /// survive (or never existed).
    pub fn get(&self, category_id: &str) -> Option<&[&'a ResourceItem]> {
        self.categories.get(category_id).map(Vec::as_slice)
    }

    /// Iterates surviving categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a ResourceItem])> {
        self.categories.iter().map(|(id, items)| (*id, items.as_slice()))
    }

    pub fn category_ids(&self) -> impl Iterator<Item = &'a str> {
        self.categories.keys().copied()
    }

    /// Number of surviving categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total surviving items across all categories.
    pub fn total_items(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for FilteredView<'a> {
    type Item = (&'a str, Vec<&'a ResourceItem>);
    type IntoIter = indexmap::map::IntoIter<&'a str, Vec<&'a ResourceItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.into_iter()
    }
}

/// Filters the whole catalog against a normalized query.
///
/// Matching rules:
/// - The empty sentinel query returns the catalog unchanged (identity
///   short-circuit, not a filtering rule).
/// - A category whose id contains the query admits **all** of its items,
///   regardless of their own name/description.
/// - Otherwise an item survives when its name or description contains the
///   query, case-insensitively.
/// - Categories with no surviving items are dropped; category and item order
///   follow the catalog.
pub fn filter_catalog<'a>(catalog: &'a Catalog, query: &NormalizedQuery) -> FilteredView<'a> {
    let mut categories = IndexMap::new();

    if query.is_empty() {
        for (id, items) in catalog.iter() {
            categories.insert(id, items.iter().collect());
        }
        return FilteredView { categories };
    }

    for (id, items) in catalog.iter() {
        let category_matches = category_name_matches(id, query);
        let surviving: Vec<&ResourceItem> = items
            .iter()
            .filter(|item| category_matches || item_matches(item, query))
            .collect();

        if !surviving.is_empty() {
            categories.insert(id, surviving);
        }
    }

    FilteredView { categories }
}

/// Filters a single category's items against a normalized query.
///
/// Unlike [`filter_catalog`] there is no category-name short-circuit: the
/// caller already selected the category, so only item name/description
/// participate in matching. The empty sentinel returns the input unchanged.
pub fn filter_items<'a>(
    items: &'a [ResourceItem],
    query: &NormalizedQuery,
) -> Vec<&'a ResourceItem> {
    if query.is_empty() {
        return items.iter().collect();
    }

    items.iter().filter(|item| item_matches(item, query)).collect()
}

/// Case-insensitive substring test on the category id.
fn category_name_matches(category_id: &str, query: &NormalizedQuery) -> bool {
    category_id.to_lowercase().contains(query.as_str())
}

/// True when the item's name or description contains the query. Absent
/// fields never match.
fn item_matches(item: &ResourceItem, query: &NormalizedQuery) -> bool {
    field_matches(item.name.as_deref(), query) || field_matches(item.description.as_deref(), query)
}

fn field_matches(field: Option<&str>, query: &NormalizedQuery) -> bool {
    field.is_some_and(|text| text.to_lowercase().contains(query.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceId;

    fn test_catalog() -> Catalog {
        Catalog::parse(
            r#"{
                "learning": [
                    {"id": 1, "name": "MDN Web Docs", "description": "Reference for web standards", "url": "https://developer.mozilla.org"},
                    {"id": 2, "name": "Rust Book", "description": "Official guide to Rust", "url": "https://doc.rust-lang.org/book"}
                ],
                "tools": [
                    {"id": 3, "name": "ripgrep", "description": "Fast line-oriented search", "url": "https://github.com/BurntSushi/ripgrep"},
                    {"id": 4, "name": "jq", "description": "Command-line JSON processor", "url": "https://jqlang.github.io/jq"}
                ],
                "testing": [
                    {"id": 5, "name": "Playwright", "description": "Browser automation", "url": "https://playwright.dev"}
                ]
            }"#,
        )
        .unwrap()
    }

    fn test_item(id: i64, name: Option<&str>, description: Option<&str>) -> ResourceItem {
        ResourceItem {
            id: ResourceId::Int(id),
            name: name.map(String::from),
            description: description.map(String::from),
            url: String::new(),
            icon: None,
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new(""));

        let ids: Vec<&str> = view.category_ids().collect();
        assert_eq!(ids, vec!["learning", "tools", "testing"]);
        assert_eq!(view.total_items(), catalog.total_resources());
        assert_eq!(view.get("tools").unwrap().len(), 2);
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new("   \t"));
        assert_eq!(view.total_items(), catalog.total_resources());
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new("RIPGREP"));

        assert_eq!(view.len(), 1);
        let items = view.get("tools").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ResourceId::Int(3));
    }

    #[test]
    fn test_description_participates_in_matching() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new("json"));

        let items = view.get("tools").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ResourceId::Int(4));
    }

    #[test]
    fn test_category_name_match_admits_all_items() {
        let catalog = test_catalog();
        // "tool" matches no item name or description, only the category id.
        let view = filter_catalog(&catalog, &NormalizedQuery::new("tool"));

        assert_eq!(view.len(), 1);
        assert_eq!(view.get("tools").unwrap().len(), 2); // Both items pass
    }

    #[test]
    fn test_partial_category_survives_with_matching_items_only() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new("rust"));

        let items = view.get("learning").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ResourceId::Int(2));
        assert!(view.get("tools").is_none()); // No survivors, dropped
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new("zzzzz"));

        assert!(view.is_empty());
        assert_eq!(view.total_items(), 0);
        assert!(view.get("learning").is_none());
    }

    #[test]
    fn test_order_follows_the_catalog() {
        let catalog = test_catalog();
        // "e" hits every category (name or description matches throughout).
        let view = filter_catalog(&catalog, &NormalizedQuery::new("e"));

        let ids: Vec<&str> = view.category_ids().collect();
        assert_eq!(ids, vec!["learning", "tools", "testing"]);
    }

    #[test]
    fn test_missing_fields_never_match() {
        let items = vec![test_item(1, None, None), test_item(2, Some("named"), None)];
        let matched = filter_items(&items, &NormalizedQuery::new("name"));

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, ResourceId::Int(2));
    }

    #[test]
    fn test_filtered_items_borrow_the_originals() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new("ripgrep"));

        let original = &catalog.get("tools").unwrap()[0];
        let filtered = view.get("tools").unwrap()[0];
        assert!(std::ptr::eq(original, filtered)); // Same item, not a copy
    }

    #[test]
    fn test_filter_items_empty_query_is_identity() {
        let items = vec![test_item(1, Some("a"), None), test_item(2, Some("b"), None)];
        let matched = filter_items(&items, &NormalizedQuery::new(" "));
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_filter_items_has_no_category_short_circuit() {
        let catalog = test_catalog();
        // "tools" names the category but no item text; within the category
        // list itself nothing matches.
        let matched = filter_items(catalog.get("tools").unwrap(), &NormalizedQuery::new("tools"));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_filter_items_matches_name_and_description() {
        let catalog = test_catalog();
        let items = catalog.get("learning").unwrap();

        assert_eq!(filter_items(items, &NormalizedQuery::new("mdn")).len(), 1);
        assert_eq!(filter_items(items, &NormalizedQuery::new("guide")).len(), 1);
        assert_eq!(filter_items(items, &NormalizedQuery::new("xyz")).len(), 0);
    }

    #[test]
    fn test_query_with_interior_whitespace_matches_verbatim() {
        let catalog = test_catalog();
        let view = filter_catalog(&catalog, &NormalizedQuery::new("web docs"));

        assert_eq!(view.total_items(), 1);
        assert_eq!(view.get("learning").unwrap()[0].id, ResourceId::Int(1));
    }
}
