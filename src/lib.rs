//! devdash - Browse a curated catalog of developer resources
//!
//! This library powers a terminal dashboard over a category-partitioned
//! catalog of developer resources. It supports:
//!
//! - Parsing the catalog document while preserving its category order
//! - Live substring filtering across category names, resource names and descriptions
//! - A dashboard/category view model with capped dashboard previews
//! - A persisted username/theme session gating the UI
//! - Favicon URL derivation for resource links
//!
//! # Example
//!
//! ```
//! use devdash::{Catalog, NormalizedQuery, filter_catalog};
//!
//! let catalog = Catalog::load_embedded()?;
//! let results = filter_catalog(&catalog, &NormalizedQuery::new("rust"));
//! println!("{} matching resources", results.total_items());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod filters;
pub mod models;
pub mod session_store;
pub mod tui;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use filters::{FilteredView, NormalizedQuery, filter_catalog, filter_items};
pub use models::{Catalog, ResourceId, ResourceItem, Session, Theme, category_title};
pub use session_store::{SessionError, SessionStore};
pub use utils::favicon_url;
pub use views::{PREVIEW_LIMIT, ResolvedView, ViewState};
