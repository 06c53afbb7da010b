use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod harvest;
mod report;

#[derive(Debug, Parser)]
#[command(name = "bookdash")]
#[command(about = "Catalogue harvester and descriptive-statistics reporter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Harvest catalogue listing pages into one ordered record collection
    Harvest {
        /// Override the configured page-count bound
        #[arg(long)]
        pages: Option<u32>,

        /// Write the harvested collection as CSV to this path
        #[arg(long)]
        out: Option<PathBuf>,

        /// Persist the harvested collection to the database
        #[arg(long)]
        store: bool,

        /// With --store: delete previously stored records first
        #[arg(long, requires = "store")]
        replace: bool,
    },
    /// Read stored records back and print descriptive statistics
    Report {
        /// Print titles containing this keyword (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// How many of the most expensive records to list
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Number of price histogram bins
        #[arg(long, default_value_t = 30)]
        bins: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = bookdash_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Harvest {
            pages,
            out,
            store,
            replace,
        } => harvest::run_harvest(&config, pages, out.as_deref(), store, replace).await,
        Commands::Report { search, top, bins } => {
            report::run_report(&config, search.as_deref(), top, bins).await
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_owned()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the persistence store configured via `DATABASE_URL`.
///
/// Inability to reach the store is fatal: the error propagates to the
/// operator instead of degrading into a partial run.
pub(crate) async fn connect_store(
    config: &bookdash_core::AppConfig,
) -> anyhow::Result<sqlx::PgPool> {
    let database_url = config.database_url.as_deref().ok_or_else(|| {
        anyhow::anyhow!("DATABASE_URL is not set; this command needs the persistence store")
    })?;

    let pool = bookdash_db::connect_pool(
        database_url,
        bookdash_db::PoolConfig {
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        },
    )
    .await
    .context("failed to connect to the persistence store")?;

    Ok(pool)
}
