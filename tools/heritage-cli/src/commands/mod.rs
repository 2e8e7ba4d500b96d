//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod lang;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category to include (repeatable; none means all).
    #[arg(short = 'C', long = "category")]
    pub categories: Vec<String>,

    /// Minimum price in KWD.
    #[arg(long)]
    pub min: Option<String>,

    /// Maximum price in KWD.
    #[arg(long)]
    pub max: Option<String>,

    /// Sort order: bestseller, newest, price-low, price-high, name.
    #[arg(short, long, default_value = "bestseller")]
    pub sort: String,

    /// Match categories by id instead of by label substring.
    #[arg(long)]
    pub exact: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add (clamped to available stock).
        #[arg(short, long, default_value = "1")]
        qty: i64,
        /// Variant, e.g. a size or color.
        #[arg(long)]
        variant: Option<String>,
    },
    /// Remove a product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set a product's quantity (0 removes it).
    Set {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove everything.
    Clear,
}

/// Arguments for the lang command.
#[derive(Args)]
pub struct LangArgs {
    /// Language to switch to (en or ar); omit to show the current one.
    pub language: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
