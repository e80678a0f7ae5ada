use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use todoql::app_context::AppContext;
use todoql::config::{Overrides, ServerConfig, DEFAULT_DB_PATH};
use todoql::graphql::build_schema;
use todoql::server;
use todoql::store::FileStore;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the GraphQL API
    Serve {
        /// YAML configuration file
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(short, long)]
        port: Option<u16>,
        /// Local JSON document (TODOQL_DB_PATH)
        #[clap(long)]
        db: Option<PathBuf>,
        /// URL of a JSON object in object storage (TODOQL_OBJECT_URL)
        #[clap(long)]
        object_url: Option<String>,
        /// Bearer token for object storage (TODOQL_OBJECT_TOKEN)
        #[clap(long)]
        object_token: Option<String>,
        /// Keep the document in memory only; wins over --object-url and --db
        #[clap(long)]
        memory: bool,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    /// Print the GraphQL schema
    Schema,
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    /// Create the document file if it does not exist
    Init {
        #[clap(short, long, default_value = DEFAULT_DB_PATH)]
        db: PathBuf,
    },
    /// Print the current document
    Show {
        #[clap(short, long, default_value = DEFAULT_DB_PATH)]
        db: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            config,
            port,
            db,
            object_url,
            object_token,
            memory,
            cors_origin,
        } => {
            let mut config = ServerConfig::load(config.as_deref())?;
            config.apply(&Overrides::from_env()?);
            config.apply(&Overrides {
                port,
                cors_origin,
                db,
                object_url,
                object_token,
                memory,
            });

            info!("Starting server on port {}", config.port);
            server::start_server(&config).await?;
        }
        Commands::Schema => {
            let store = std::sync::Arc::new(todoql::store::MemoryStore::new());
            println!("{}", build_schema(AppContext::new(store)).sdl());
        }
        Commands::Db { command } => match command {
            DbCommands::Init { db } => {
                let store = FileStore::open(&db).await?;
                info!("Document ready at {}", store.path().display());
            }
            DbCommands::Show { db } => {
                let doc = FileStore::read_existing(&db).await?;
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
        },
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("hyper=off,{}", log_level)))
        .with_writer(std::io::stderr)
        .init();
}
