use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use seedscout::app::App;
use seedscout::config::Config;
use seedscout::domain::{CollectionKind, SortPolicy};

/// Seed collection listing viewer: fetches live marketplace listings,
/// enriches them with images and staking points, and ranks the result.
#[derive(Parser, Debug)]
#[command(name = "seedscout", version)]
struct Cli {
    /// Collections to load, in order
    #[arg(short, long = "collection", value_enum, default_value = "mythic")]
    collections: Vec<CollectionArg>,

    /// Ranking applied to the final view
    #[arg(short, long, value_enum, default_value = "best-deal")]
    sort: SortArg,

    /// Path to the TOML config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CollectionArg {
    Mythic,
    Ancient,
}

impl From<CollectionArg> for CollectionKind {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::Mythic => Self::Mythic,
            CollectionArg::Ancient => Self::Ancient,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    BestDeal,
    HighestPrice,
    LowestPrice,
    Unranked,
}

impl From<SortArg> for SortPolicy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::BestDeal => Self::BestDeal,
            SortArg::HighestPrice => Self::HighestPrice,
            SortArg::LowestPrice => Self::LowestPrice,
            SortArg::Unranked => Self::Unranked,
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("seedscout starting");

    let collections = cli.collections.into_iter().map(Into::into).collect();

    if let Err(e) = App::run(config, collections, cli.sort.into()).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("seedscout done");
}
