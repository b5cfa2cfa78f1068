//! GoMarket CLI - cart inspection and management tool.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! gm-cli show
//!
//! # Add a product (repeat adds bump the quantity)
//! gm-cli add --id sku-1 --title "Shoe" --image-url https://img.example/shoe.png --price 100
//!
//! # Adjust quantities
//! gm-cli increment sku-1
//! gm-cli decrement sku-1
//!
//! # Start over
//! gm-cli clear
//! ```
//!
//! The cart blob lives under the platform data directory by default;
//! `--data-dir` points the tool at a different one.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use gomarket_cart::{CartStore, JsonFileStorage};

mod commands;

#[derive(Parser)]
#[command(name = "gm-cli")]
#[command(author, version, about = "GoMarket cart tools")]
struct Cli {
    /// Directory holding the cart blob (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current cart contents
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display title
        #[arg(long)]
        title: String,

        /// Product image URL
        #[arg(long)]
        image_url: String,

        /// Unit price (decimal, e.g. `19.99`)
        #[arg(long)]
        price: Decimal,
    },
    /// Increase an item's quantity by one
    Increment {
        /// Product id
        id: String,
    },
    /// Decrease an item's quantity by one (removes the item at zero)
    Decrement {
        /// Product id
        id: String,
    },
    /// Remove everything from the cart
    Clear,
}

/// Resolve the cart data directory.
fn data_dir(cli_dir: Option<PathBuf>) -> PathBuf {
    cli_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gomarket")
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storage = JsonFileStorage::new(data_dir(cli.data_dir));
    let store = CartStore::load(Arc::new(storage)).await;

    match cli.command {
        Commands::Show => commands::show(&store).await,
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => commands::add(&store, id, title, image_url, price).await?,
        Commands::Increment { id } => commands::increment(&store, &id).await?,
        Commands::Decrement { id } => commands::decrement(&store, &id).await?,
        Commands::Clear => commands::clear(&store).await?,
    }

    Ok(())
}
