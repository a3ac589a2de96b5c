//! FitView CLI - Product page resolution, ingestion, and fit scoring tools.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a saved product page into an identity (JSON on stdout)
//! fitview resolve --url https://www.uniqlo.com/au/en/products/E475053-000/00 --html page.html
//!
//! # Resolve and store it, deduplicated on (brand, sku)
//! fitview ingest --url https://www.uniqlo.com/au/en/products/E475053-000/00 --html page.html
//!
//! # Run database migrations
//! fitview migrate
//!
//! # Fit scoring
//! fitview compass --width 0.8 --length -0.6
//! fitview compare --height-a 180 --weight-a 75 --build-a athletic --height-b 178 --weight-b 77 --build-b athletic
//! fitview suggest-build --height 180 --weight 75
//! fitview translate --from JP --to US
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to override the default `fitview=info`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fitview_core::{BodyBuild, MarketRegion};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "fitview")]
#[command(author, version, about = "FitView CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a saved product page and print its identity
    Resolve {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Resolve a saved product page and store it if new
    Ingest {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Run database migrations
    Migrate,
    /// Describe a fit compass reading
    Compass {
        /// Width fit in [-1, 1] (negative is tight)
        #[arg(short, long, allow_negative_numbers = true)]
        width: f64,

        /// Length fit in [-1, 1] (negative is short)
        #[arg(short, long, allow_negative_numbers = true)]
        length: f64,
    },
    /// Compare two body profiles
    Compare {
        #[arg(long)]
        height_a: Option<u32>,
        #[arg(long)]
        weight_a: Option<u32>,
        #[arg(long)]
        build_a: Option<BodyBuild>,
        #[arg(long)]
        height_b: Option<u32>,
        #[arg(long)]
        weight_b: Option<u32>,
        #[arg(long)]
        build_b: Option<BodyBuild>,
    },
    /// Suggest a body build from height and weight
    SuggestBuild {
        /// Height in centimetres
        #[arg(long)]
        height: u32,

        /// Weight in kilograms
        #[arg(long)]
        weight: u32,
    },
    /// Show how sizing translates between two regions
    Translate {
        /// Region the garment was sized for (e.g. JP)
        #[arg(long)]
        from: MarketRegion,

        /// Region of the shopper (e.g. US)
        #[arg(long)]
        to: MarketRegion,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Product page URL
    #[arg(short, long)]
    url: String,

    /// Saved HTML of the page
    #[arg(long)]
    html: PathBuf,
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fitview=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Resolve { page } => commands::page::resolve(&page.url, &page.html).await?,
        Commands::Ingest { page } => commands::page::ingest(&page.url, &page.html).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Compass { width, length } => commands::fit::compass(width, length)?,
        Commands::Compare {
            height_a,
            weight_a,
            build_a,
            height_b,
            weight_b,
            build_b,
        } => commands::fit::compare(
            (height_a, weight_a, build_a),
            (height_b, weight_b, build_b),
        )?,
        Commands::SuggestBuild { height, weight } => commands::fit::suggest_build(height, weight)?,
        Commands::Translate { from, to } => commands::fit::translate(from, to)?,
    }
    Ok(())
}
