use crate::filters::{NormalizedQuery, filter_catalog, filter_items};
use crate::models::{Catalog, ResourceItem, category_title};

/// Items shown per category on the unfiltered dashboard.
///
/// The cap applies only while browsing. An active query shows every match,
/// even past the cap; the original exposed this inconsistency and it is
/// preserved here unchanged.
pub const PREVIEW_LIMIT: usize = 4;

/// One category section on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSection<'a> {
    pub category_id: &'a str,
    pub title: String,
    /// Items to display, capped at [`PREVIEW_LIMIT`] when not filtering.
    pub items: Vec<&'a ResourceItem>,
    /// Surviving items before the preview cap.
    pub total_matches: usize,
}

impl DashboardSection<'_> {
    /// Matches hidden by the preview cap.
    pub fn hidden_count(&self) -> usize {
        self.total_matches - self.items.len()
    }
}

/// The composed dashboard: every surviving category with its preview.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub sections: Vec<DashboardSection<'a>>,
    pub total_matches: usize,
    /// True when a query is active (previews uncapped, empties dropped).
    pub filtering: bool,
}

/// The composed detail view for a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView<'a> {
    pub category_id: String,
    pub title: String,
    pub items: Vec<&'a ResourceItem>,
    /// Category size before filtering; zero for unknown category ids.
    pub total_in_category: usize,
    pub filtering: bool,
}

/// Either screen the controller can compose.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView<'a> {
    Dashboard(DashboardView<'a>),
    Category(CategoryView<'a>),
}

pub(super) fn dashboard_view<'a>(
    catalog: &'a Catalog,
    query: &NormalizedQuery,
) -> DashboardView<'a> {
    let filtering = !query.is_empty();
    let filtered = filter_catalog(catalog, query);

    let mut sections = Vec::with_capacity(filtered.len());
    let mut total_matches = 0;
    for (category_id, matches) in filtered {
        let total = matches.len();
        total_matches += total;

        let mut items = matches;
        if !filtering {
            items.truncate(PREVIEW_LIMIT);
        }

        sections.push(DashboardSection {
            category_id,
            title: category_title(category_id),
            items,
            total_matches: total,
        });
    }

    DashboardView { sections, total_matches, filtering }
}

pub(super) fn category_view<'a>(
    catalog: &'a Catalog,
    category_id: &str,
    query: &NormalizedQuery,
) -> CategoryView<'a> {
    // Unknown ids resolve to an empty list, never an error.
    let all = catalog.get(category_id).unwrap_or(&[]);
    let items = filter_items(all, query);

    CategoryView {
        category_id: category_id.to_string(),
        title: category_title(category_id),
        items,
        total_in_category: all.len(),
        filtering: !query.is_empty(),
    }
}
