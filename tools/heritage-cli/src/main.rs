//! Heritage CLI - browse the Heritage Home catalog and manage a cart.
//!
//! Commands:
//! - `heritage products` - List products with filters and sorting
//! - `heritage show` - Show one product
//! - `heritage featured` - List featured products
//! - `heritage categories` - List browse categories
//! - `heritage cart` - Show or change the cart
//! - `heritage lang` - Show or set the display language
//! - `heritage config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, ConfigArgs, LangArgs, ProductsArgs, ShowArgs};

/// Heritage CLI - Browse handcrafted pieces and manage your cart
#[derive(Parser)]
#[command(name = "heritage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show product details
    Show(ShowArgs),

    /// List featured products
    Featured,

    /// List browse categories
    Categories,

    /// Show or change the cart
    Cart(CartArgs),

    /// Show or set the display language
    Lang(LangArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Products(args) => commands::catalog::products(args, &ctx),
        Commands::Show(args) => commands::catalog::show(args, &ctx),
        Commands::Featured => commands::catalog::featured(&ctx),
        Commands::Categories => commands::catalog::categories(&ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Lang(args) => commands::lang::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
