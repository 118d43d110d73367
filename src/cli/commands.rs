use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::filters::{NormalizedQuery, filter_catalog, filter_items};
use crate::models::{Catalog, ResourceItem, category_title};
use crate::session_store::persistence::session_file_path;
use crate::tui;
use crate::utils::get_config_dir;

#[derive(Parser)]
#[command(name = "devdash")]
#[command(version = "0.1.0")]
#[command(about = "Browse a curated catalog of developer resources", long_about = None)]
pub struct Cli {
    /// Load the catalog from a JSON file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the catalog
    Stats,
    /// Search the catalog and print matching resources
    Search {
        /// Text to look for in category names, resource names and descriptions
        query: String,

        /// Restrict the search to a single category
        #[arg(long)]
        category: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_path(path)?,
        None => Catalog::load_embedded()?,
    };
    info!(
        "Loaded catalog: {} resources in {} categories",
        catalog.total_resources(),
        catalog.len()
    );

    match &cli.command {
        Some(Commands::Stats) => {
            show_stats(&catalog)?;
        }
        Some(Commands::Search { query, category }) => {
            run_search(&catalog, query, category.as_deref())?;
        }
        None => {
            tui::run_interactive(catalog)?;
        }
    }

    Ok(())
}

fn show_stats(catalog: &Catalog) -> Result<()> {
    println!("devdash catalog statistics");
    println!("==========================");
    println!("Total resources: {}", catalog.total_resources());
    println!("Categories: {}", catalog.len());
    for (category_id, items) in catalog.iter() {
        println!("  {}: {}", category_title(category_id), items.len());
    }

    let config_dir = get_config_dir()?;
    println!();
    println!("Session file: {}", session_file_path(&config_dir).display());

    Ok(())
}

fn run_search(catalog: &Catalog, query: &str, category: Option<&str>) -> Result<()> {
    let normalized = NormalizedQuery::new(query);

    match category {
        Some(category_id) => {
            let Some(items) = catalog.get(category_id) else {
                bail!("Unknown category: {category_id}");
            };
            let matches = filter_items(items, &normalized);
            print_category(category_id, &matches);
            println!();
            println!("{} matches", matches.len());
        }
        None => {
            let view = filter_catalog(catalog, &normalized);
            for (category_id, items) in view.iter() {
                print_category(category_id, items);
            }
            println!();
            println!("{} matches in {} categories", view.total_items(), view.len());
        }
    }

    Ok(())
}

fn print_category(category_id: &str, items: &[&ResourceItem]) {
    if items.is_empty() {
        return;
    }

    println!("{} ({})", category_title(category_id), items.len());
    for item in items {
        match item.description.as_deref() {
            Some(desc) => println!("  {} - {}", item.display_name(), desc),
            None => println!("  {}", item.display_name()),
        }
        if !item.url.is_empty() {
            println!("    {}", item.url);
        }
    }
}
