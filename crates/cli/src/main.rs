//! OceanPro CLI - Local cart inspection and mutation tools.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product
//! oceanpro-cli add -i p-101 -q 2
//!
//! # Set a quantity exactly (0 removes the line)
//! oceanpro-cli update -i p-101 -q 3
//!
//! # Remove a product
//! oceanpro-cli remove -i p-101
//!
//! # Show the cart with line totals and subtotal
//! oceanpro-cli show
//!
//! # Empty the cart
//! oceanpro-cli clear
//! ```
//!
//! State is persisted under `OCEANPRO_STATE_DIR` (default `.oceanpro`);
//! products resolve against `OCEANPRO_CATALOG` or the bundled demo catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod catalog;
mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "oceanpro-cli")]
#[command(author, version, about = "OceanPro cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add units of a product to the cart
    Add {
        /// Product id (e.g. p-101)
        #[arg(short, long)]
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        #[arg(short, long)]
        id: String,
    },
    /// Set a product's quantity exactly (0 removes it)
    Update {
        /// Product id
        #[arg(short, long)]
        id: String,

        /// New quantity
        #[arg(short, long)]
        qty: u32,
    },
    /// Empty the cart
    Clear,
    /// Show the cart with line totals and subtotal
    Show,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Add { id, qty } => commands::cart::add(&config, &id, qty)?,
        Commands::Remove { id } => commands::cart::remove(&config, &id)?,
        Commands::Update { id, qty } => commands::cart::update(&config, &id, qty)?,
        Commands::Clear => commands::cart::clear(&config)?,
        Commands::Show => commands::cart::show(&config)?,
    }
    Ok(())
}
