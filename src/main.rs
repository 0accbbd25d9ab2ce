//! kisan-connect - Farmer marketplace browser
//!
//! Browse crop listings, look up mandi prices by state, and compare middleman,
//! direct sale, and bulk buyer pricing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use kisan_connect::commands::{CatalogCommand, CompareCommand, PricesCommand};
use kisan_connect::compare::BestOptionPolicy;
use kisan_connect::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kisan-connect",
    version,
    about = "Farmer marketplace browser",
    long_about = "Browse crop listings, look up mandi prices by state, and compare middleman, direct sale, and bulk buyer pricing."
)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, env = "KISAN_FORMAT")]
    format: Option<OutputFormat>,

    /// How the comparison picks its best option (fixed, highest-farmer-price)
    #[arg(long, global = true, env = "KISAN_BEST_OPTION")]
    best_option: Option<BestOptionPolicy>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every crop in the marketplace
    #[command(alias = "ls")]
    List {
        /// Minimum direct price per kg
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum direct price per kg
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Search crops by name
    #[command(alias = "s")]
    Search {
        /// Search term (case-insensitive substring)
        term: String,

        /// Translate Hindi crop terms before searching
        #[arg(short, long)]
        translate: bool,
    },

    /// Show mandi prices for a state
    #[command(alias = "p")]
    Prices {
        /// Region key, state name, or menu number (1-5)
        region: String,
    },

    /// Compare middleman, direct sale, and market buyer prices
    #[command(alias = "c")]
    Compare,

    /// List supported regions
    Regions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(policy) = cli.best_option {
        config.best_option = policy;
    }

    match cli.command {
        Commands::List { min_price, max_price } => {
            if min_price.is_some() {
                config.min_price = min_price;
            }
            if max_price.is_some() {
                config.max_price = max_price;
            }
            println!("{}", CatalogCommand::new(config).list());
        }

        Commands::Search { term, translate } => {
            config.translate_hindi |= translate;
            println!("{}", CatalogCommand::new(config).search(&term));
        }

        Commands::Prices { region } => {
            let output = PricesCommand::new(config).execute(&region)?;
            println!("{}", output);
        }

        Commands::Compare => {
            println!("{}", CompareCommand::new(config).execute());
        }

        Commands::Regions => {
            println!("{}", PricesCommand::new(config).regions());
        }
    }

    Ok(())
}
