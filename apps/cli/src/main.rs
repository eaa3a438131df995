use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crypto_monitor_core::constants::DEFAULT_HISTORY_DAYS;
use crypto_monitor_core::{SortKey, SortOrder};

mod commands;
mod config;
mod render;

use config::Config;

#[derive(Parser)]
#[command(
    name = "crypto-monitor",
    version,
    about = "Crypto market dashboard with a local snapshot cache"
)]
struct Cli {
    /// Backend API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Quote currency, e.g. USD
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Number of coins fetched from the listings endpoint
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// Path of the SQLite cache database
    #[arg(long, global = true)]
    cache_db: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Global stats, top movers, and the sortable market table
    Dashboard {
        /// Keep only coins whose name or symbol contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Column the market table is sorted by
        #[arg(long, value_enum, default_value = "market-cap")]
        sort: SortColumn,

        /// Sort direction
        #[arg(long, value_enum, default_value = "desc")]
        order: Direction,

        /// Re-render every N seconds until interrupted
        #[arg(long)]
        refresh: Option<u64>,
    },
    /// Detail view for one coin, with a price chart
    Coin {
        /// Ticker symbol, e.g. BTC
        symbol: String,

        /// Chart window in days
        #[arg(long, default_value_t = DEFAULT_HISTORY_DAYS)]
        days: u32,

        /// Write the price chart as an SVG file
        #[arg(long, value_name = "FILE")]
        chart_out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortColumn {
    Price,
    Change,
    MarketCap,
    Volume,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Price => SortKey::Price,
            SortColumn::Change => SortKey::Change24h,
            SortColumn::MarketCap => SortKey::MarketCap,
            SortColumn::Volume => SortKey::Volume24h,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for SortOrder {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => SortOrder::Ascending,
            Direction::Desc => SortOrder::Descending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    // The database helpers read the cache path from the environment, so the
    // flag has to land there before any of them run.
    if let Some(cache_db) = &cli.cache_db {
        std::env::set_var("CRYPTO_MONITOR_CACHE_DB", cache_db);
    }

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }

    let command = cli.command.unwrap_or(Commands::Dashboard {
        filter: None,
        sort: SortColumn::MarketCap,
        order: Direction::Desc,
        refresh: None,
    });

    match command {
        Commands::Dashboard {
            filter,
            sort,
            order,
            refresh,
        } => commands::dashboard::run(&config, filter, sort.into(), order.into(), refresh).await,
        Commands::Coin {
            symbol,
            days,
            chart_out,
        } => commands::coin::run(&config, &symbol, days, chart_out).await,
    }
}
