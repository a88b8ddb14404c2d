#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use festidex::query::DEFAULT_SUGGESTION_LIMIT;
use festidex::{CatalogConfig, HttpSource, SearchEngine, Snapshot};
use festidex_http::{serve, ServerConfig};

#[derive(Parser)]
#[command(name = "festidex")]
#[command(about = "Artist and concert catalog server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, env = "FESTIDEX_BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind_addr: String,
    #[arg(long, env = "FESTIDEX_API_URL", default_value = festidex::source::config::DEFAULT_API_URL)]
    api_url: String,
    #[arg(long, env = "FESTIDEX_ASSETS_DIR", default_value = "assets")]
    assets_dir: PathBuf,
    #[arg(long, env = "FESTIDEX_FETCH_TIMEOUT_SECS", default_value = "30")]
    fetch_timeout_secs: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Load the catalog once and print matching hits as JSON
    Search {
        /// Free-text query
        query: String,

        /// Stop after this many hits (search-as-you-type uses 10)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Shorthand for --limit 10
        #[arg(long, conflicts_with = "limit")]
        suggest: bool,
    },
}

impl Cli {
    fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            api_url: self.api_url.clone(),
            fetch_timeout_secs: self.fetch_timeout_secs,
        }
    }
}

async fn run_search(
    catalog: CatalogConfig,
    query: &str,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = HttpSource::new(catalog)?;
    let snapshot = Snapshot::load(&source).await?;
    let engine = SearchEngine::new(&snapshot);
    let hits = match limit {
        Some(limit) => engine.suggest(query, limit),
        None => engine.search(query),
    };
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let catalog = cli.catalog_config();

    match cli.command {
        Some(Command::Search {
            ref query,
            limit,
            suggest,
        }) => {
            let limit = if suggest {
                Some(DEFAULT_SUGGESTION_LIMIT)
            } else {
                limit
            };
            run_search(catalog, query, limit).await
        }
        None => {
            serve(ServerConfig {
                bind_addr: cli.bind_addr,
                assets_dir: Some(cli.assets_dir),
                catalog,
            })
            .await
        }
    }
}
