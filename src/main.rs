use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use todo_bff::config::Config;
use todo_bff::graphql::schema::schema_sdl;
use todo_bff::observability;
use todo_bff::seed::demo_todos;
use todo_bff::server::{self, ServerOptions};
use todo_bff::storage::{InMemoryStorage, Storage};
use todo_bff::TodoService;

#[derive(Parser)]
#[command(name = "todo_bff")]
#[command(about = "GraphQL backend-for-frontend for the to-do list client")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL HTTP server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to run the server on
        #[arg(short, long)]
        port: Option<u16>,

        /// Start with an empty store instead of the demo todos
        #[arg(long)]
        no_seed: bool,

        /// Expose Prometheus metrics at /metrics
        #[arg(long)]
        metrics: bool,
    },
    /// Print the GraphQL schema in SDL form
    Schema,
}

fn create_storage(seed: bool) -> Arc<dyn Storage> {
    if seed {
        let todos = demo_todos();
        info!("Seeding in-memory storage with {} demo todos", todos.len());
        Arc::new(InMemoryStorage::with_todos(todos))
    } else {
        info!("Using empty in-memory storage");
        Arc::new(InMemoryStorage::new())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    match cli.command {
        Commands::Schema => {
            println!("{}", schema_sdl());
            Ok(())
        }
        Commands::Serve {
            config,
            host,
            port,
            no_seed,
            metrics,
        } => {
            let mut config = Config::load(config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if no_seed {
                config.store.seed_demo_data = false;
            }
            if metrics {
                config.metrics.enabled = true;
            }

            let _log_guard = observability::init_logging(&config.logging);
            info!("Starting todo BFF on {}", config.bind_address());

            let metrics_handle = if config.metrics.enabled {
                match observability::metrics::init() {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        warn!("Failed to initialize metrics: {}", e);
                        None
                    }
                }
            } else {
                None
            };

            let storage = create_storage(config.store.seed_demo_data);
            info!("🧠 Using in-memory storage (data will not persist)");
            let service = TodoService::new(storage);

            let options = ServerOptions {
                graphiql: config.server.graphiql,
                metrics: metrics_handle,
            };

            if let Err(e) = server::start_server(&config.server, service, options).await {
                tracing::error!("❌ Server failed: {e}");
                return Err(e);
            }
            Ok(())
        }
    }
}
