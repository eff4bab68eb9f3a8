//! Shopfront CLI - catalog browsing and cart quotes.
//!
//! # Usage
//!
//! ```bash
//! # List women's winterwear, cheapest first
//! shop-cli catalog list --category women --type winterwear --sort low-to-high
//!
//! # Show a product with related items
//! shop-cli catalog show aaaab
//!
//! # Quote a cart: two M tees and one sizeless cap
//! shop-cli cart quote --item aaaaa:M:2 --item aaaak:1
//! ```
//!
//! # Commands
//!
//! - `catalog list|show|bestsellers|latest` - Browse the catalog
//! - `cart quote` - Build a cart and print its order summary
//!
//! The catalog is read from `--catalog`, then `SHOP_CATALOG_PATH`, and falls
//! back to the bundled sample catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopfront_core::{Category, SubCategory};
use shopfront_storefront::{Catalog, SortOrder, StorefrontConfig};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::cart::ItemSpec;

const SAMPLE_CATALOG: &str = include_str!("../data/catalog.yaml");

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "shop_cli=info,shopfront_storefront=warn";

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "Shopfront catalog and cart tools")]
struct Cli {
    /// Catalog file (JSON or YAML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Work with a shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered and sorted
    List {
        /// Only show this category (`men`, `women`, `kids`); repeatable
        #[arg(long = "category")]
        categories: Vec<Category>,

        /// Only show this type (`topwear`, `bottomwear`, `winterwear`); repeatable
        #[arg(long = "type")]
        sub_categories: Vec<SubCategory>,

        /// Sort order (`relevant`, `low-to-high`, `high-to-low`)
        #[arg(long, default_value = "relevant")]
        sort: SortOrder,
    },
    /// Show one product and related products
    Show {
        /// Product ID
        id: String,
    },
    /// List bestsellers
    Bestsellers {
        #[arg(long, default_value_t = 4)]
        limit: usize,
    },
    /// List the latest arrivals
    Latest {
        #[arg(long, default_value_t = 12)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add items to a fresh cart and print the order summary
    Quote {
        /// Item as `ID[:SIZE]:QTY`; repeatable
        #[arg(long = "item", required = true)]
        items: Vec<ItemSpec>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = load_catalog(cli.catalog.or_else(|| config.catalog_path.clone()))?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                categories,
                sub_categories,
                sort,
            } => commands::catalog::list(&catalog, &config, &categories, &sub_categories, sort),
            CatalogAction::Show { id } => commands::catalog::show(&catalog, &config, &id)?,
            CatalogAction::Bestsellers { limit } => {
                commands::catalog::bestsellers(&catalog, &config, limit);
            }
            CatalogAction::Latest { limit } => {
                commands::catalog::latest(&catalog, &config, limit);
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Quote { items } => commands::cart::quote(catalog, config, &items),
        },
    }
    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let catalog = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading catalog");
            Catalog::load(&path)?
        }
        None => Catalog::from_yaml_str(SAMPLE_CATALOG)?,
    };
    Ok(catalog)
}
