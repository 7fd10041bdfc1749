use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use listx_api::{ApiConfig, RestApi, DEFAULT_DISPLAY_LIMIT};
use listx_storage::{SnapshotStore, DEFAULT_TOP_COUNT};

/// Prepare a listing dataset and serve it over HTTP
#[derive(Parser, Debug)]
#[command(name = "listx")]
#[command(about = "Listing dataset preparation and browsing server", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a CSV file into a JSON snapshot with image URLs
    Prepare {
        /// Source CSV file
        #[arg(default_value = "airbnb_data.csv")]
        input: PathBuf,

        /// Snapshot to write
        #[arg(default_value = "airbnb_with_photos.json")]
        output: PathBuf,
    },

    /// Copy the first records of a snapshot into a smaller snapshot
    Top {
        #[arg(default_value = "airbnb_with_photos.json")]
        input: PathBuf,

        #[arg(default_value = "airbnb_with_photos_top100.json")]
        output: PathBuf,

        /// Number of records to keep
        #[arg(short, long, default_value_t = DEFAULT_TOP_COUNT)]
        count: usize,
    },

    /// Serve the snapshot over HTTP
    Serve {
        /// Snapshot to serve
        #[arg(short, long, default_value = "airbnb_with_photos.json")]
        snapshot: PathBuf,

        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// HTTP port
        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,

        /// Directory of static files
        #[arg(long, default_value = "public")]
        public_dir: PathBuf,

        /// Records shown by the list views
        #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
        display_limit: usize,

        /// Re-read the snapshot on every request
        #[arg(long)]
        no_cache: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Prepare { input, output } => {
            let listings = listx_storage::load(&input)?;
            listx_storage::persist(&listings, &output)?;
            println!("Wrote {} with {} rows", output.display(), listings.len());
        }
        Command::Top { input, output, count } => {
            let written = listx_storage::create_top_n(&input, &output, count)?;
            println!("Top {} records saved to {}", written, output.display());
        }
        Command::Serve {
            snapshot,
            host,
            port,
            public_dir,
            display_limit,
            no_cache,
        } => {
            info!("Starting listx v{}", env!("CARGO_PKG_VERSION"));
            info!("Snapshot: {:?} (cache {})", snapshot, if no_cache { "off" } else { "on" });

            let store = if no_cache {
                SnapshotStore::uncached(&snapshot)
            } else {
                SnapshotStore::new(&snapshot)
            };
            let config = ApiConfig {
                display_limit,
                public_dir: Some(public_dir),
            };

            let http_handle = std::thread::spawn(move || {
                let sys = actix_web::rt::System::new();
                sys.block_on(RestApi::start(Arc::new(store), config, &host, port))
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
                joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
                    match joined? {
                        Ok(result) => result.context("HTTP server error")?,
                        Err(_) => anyhow::bail!("HTTP server thread panicked"),
                    }
                    info!("HTTP server stopped");
                }
            }
        }
    }

    Ok(())
}
