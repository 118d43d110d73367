//! Data models for the resource directory.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Catalog`] - Category-partitioned resource catalog, in document order
//! - [`ResourceItem`] - A single curated resource entry
//! - [`ResourceId`] - Numeric-or-string resource identifier
//! - [`Session`] - Persisted username and theme choice
//!
//! These models use serde for JSON (de)serialization; the catalog map keeps
//! the category order of the source document.

pub mod catalog;
pub mod session;

pub use catalog::{Catalog, ResourceId, ResourceItem, category_title};
pub use session::{Session, Theme};
