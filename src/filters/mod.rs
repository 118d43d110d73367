pub mod apply;
pub mod query;

pub use apply::{FilteredView, filter_catalog, filter_items};
pub use query::NormalizedQuery;
