//! View-state controller: which screen is showing and what the user typed.
//!
//! [`ViewState`] owns the active category (`None` = dashboard) and the raw
//! query string. Resolution composes the filter engine's output with the
//! preview cap into plain view structs; it holds no cache, so every call
//! reflects the current state.

mod resolve;

use anyhow::{Result, bail};

pub use resolve::{CategoryView, DashboardSection, DashboardView, PREVIEW_LIMIT, ResolvedView};

use crate::filters::NormalizedQuery;
use crate::models::Catalog;

/// Navigation and search state for one authenticated session.
///
/// The two fields move independently: selecting a category keeps the query,
/// editing the query keeps the category. Only [`ViewState::reset`] (the
/// logout cascade) clears both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_category: Option<String>,
    query: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active category id, or `None` on the dashboard.
    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Selects a category (or returns to the dashboard with `None`).
    ///
    /// Ids are not validated against the catalog here; an unknown id simply
    /// resolves to an empty detail view downstream.
    pub fn select_category(&mut self, category_id: Option<&str>) {
        self.active_category = category_id.map(String::from);
    }

    /// Raw query text as typed, before normalization.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query. Takes effect on the next resolution; there is no
    /// debounce.
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.query = raw.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn normalized_query(&self) -> NormalizedQuery {
        NormalizedQuery::new(&self.query)
    }

    /// Returns to the dashboard with no query. Only the logout cascade calls
    /// this.
    pub fn reset(&mut self) {
        self.active_category = None;
        self.query.clear();
    }

    /// Composes the dashboard: every surviving category with a capped
    /// preview (uncapped under an active query).
    pub fn resolve_dashboard<'a>(&self, catalog: &'a Catalog) -> Result<DashboardView<'a>> {
        Ok(resolve::dashboard_view(catalog, &self.normalized_query()))
    }

    /// Composes the detail view for the active category.
    ///
    /// Fails when no category is active; unknown ids are not an error and
    /// resolve to an empty list.
    pub fn resolve_category<'a>(&self, catalog: &'a Catalog) -> Result<CategoryView<'a>> {
        let Some(category_id) = self.active_category.as_deref() else {
            bail!("no active category to resolve");
        };
        Ok(resolve::category_view(catalog, category_id, &self.normalized_query()))
    }

    /// Composes whichever screen the current state selects.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<ResolvedView<'a>> {
        match self.active_category {
            Some(_) => Ok(ResolvedView::Category(self.resolve_category(catalog)?)),
            None => Ok(ResolvedView::Dashboard(self.resolve_dashboard(catalog)?)),
        }
    }
}
