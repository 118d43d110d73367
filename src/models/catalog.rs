use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default catalog document compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/devresources.json");

/// Resource identifier as it appears in the catalog document.
///
/// Curated documents mix numeric and string ids, so both forms are accepted
/// and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(n) => write!(f, "{n}"),
            ResourceId::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A single curated resource.
///
/// `name` and `description` are optional in the document; absent fields never
/// match a query. The `icon` field is carried for document compatibility but
/// display derives favicons from `url` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ResourceItem {
    /// Display name, falling back to the resource id when the document
    /// omits one.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}

/// The full resource catalog: category id -> resources, in document order.
///
/// Category order is meaningful (it drives dashboard section order and the
/// sidebar), so the map preserves the order keys appear in the JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(IndexMap<String, Vec<ResourceItem>>);

impl Catalog {
    /// Parses a catalog from JSON text.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse catalog document")
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Loads the catalog compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        Self::parse(EMBEDDED_CATALOG).context("Embedded catalog document is invalid")
    }

    /// Resources for one category, or `None` for an unknown id.
    pub fn get(&self, category_id: &str) -> Option<&[ResourceItem]> {
        self.0.get(category_id).map(Vec::as_slice)
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.0.contains_key(category_id)
    }

    /// Iterates categories in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ResourceItem])> {
        self.0.iter().map(|(id, items)| (id.as_str(), items.as_slice()))
    }

    /// Category ids in document order.
    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total resource count across all categories.
    pub fn total_resources(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl From<IndexMap<String, Vec<ResourceItem>>> for Catalog {
    fn from(categories: IndexMap<String, Vec<ResourceItem>>) -> Self {
        Catalog(categories)
    }
}

/// Derives the display title for a category id: first character uppercased,
/// remainder verbatim.
pub fn category_title(category_id: &str) -> String {
    let mut chars = category_id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
