//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for catalog documents used by integration tests
pub struct CatalogDocBuilder {
    categories: Vec<(String, Vec<String>)>,
}

impl CatalogDocBuilder {
    pub fn new() -> Self {
        Self { categories: Vec::new() }
    }

    /// Add a category with pre-rendered resource objects
    pub fn with_category(mut self, category_id: &str, items: Vec<String>) -> Self {
        self.categories.push((category_id.to_string(), items));
        self
    }

    /// Add a category of simple named resources
    pub fn with_named_resources(self, category_id: &str, names: &[&str]) -> Self {
        let items = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                resource(
                    idx as i64 + 1,
                    name,
                    &format!("{name} description"),
                    &format!("https://example.com/{idx}"),
                )
            })
            .collect();
        self.with_category(category_id, items)
    }

    /// Render the catalog document as JSON text
    pub fn to_json(&self) -> String {
        let categories = self
            .categories
            .iter()
            .map(|(id, items)| format!(r#""{}":[{}]"#, id, items.join(",")))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{categories}}}")
    }

    /// Write the document into `dir` and return the file path
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("catalog.json");
        fs::write(&path, self.to_json()).expect("Failed to write catalog file");
        path
    }
}

impl Default for CatalogDocBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a single resource object
pub fn resource(id: i64, name: &str, description: &str, url: &str) -> String {
    format!(
        r#"{{"id":{},"name":"{}","description":"{}","url":"{}"}}"#,
        id, name, description, url
    )
}

/// Render a resource with only the required fields (string id, url)
pub fn bare_resource(id: &str, url: &str) -> String {
    format!(r#"{{"id":"{}","url":"{}"}}"#, id, url)
}

/// A realistic multi-category document exercising both id forms and
/// missing optional fields
pub fn realistic_catalog_json() -> String {
    CatalogDocBuilder::new()
        .with_category(
            "learning",
            vec![
                resource(
                    1,
                    "MDN Web Docs",
                    "Reference documentation for web standards",
                    "https://developer.mozilla.org",
                ),
                resource(
                    2,
                    "The Rust Book",
                    "The official Rust language guide",
                    "https://doc.rust-lang.org/book/",
                ),
                resource(3, "Exercism", "Practice exercises with mentor feedback", "https://exercism.org"),
                resource(4, "freeCodeCamp", "Free interactive coding curriculum", "https://www.freecodecamp.org"),
                resource(5, "The Odin Project", "Full-stack curriculum", "https://www.theodinproject.com"),
            ],
        )
        .with_category(
            "tools",
            vec![
                resource(10, "ripgrep", "Line-oriented search tool", "https://github.com/BurntSushi/ripgrep"),
                resource(11, "jq", "Command-line JSON processor", "https://jqlang.github.io/jq/"),
                bare_resource("devdocs", "https://devdocs.io"),
            ],
        )
        .with_category(
            "databases",
            vec![
                resource(20, "PostgreSQL", "Advanced open source relational database", "https://www.postgresql.org"),
                resource(21, "Redis", "In-memory data store", "https://redis.io"),
            ],
        )
        .to_json()
}

/// Temp dir holding the realistic catalog; returns (dir, file path)
pub fn realistic_catalog_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, realistic_catalog_json()).expect("Failed to write catalog file");
    (dir, path)
}

/// Empty directory for isolating session state in tests
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
