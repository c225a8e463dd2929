use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use match_stats::api::{build_router, state::AppState};
use match_stats::config::{AppConfig, DataSource};
use match_stats::storage::{generate_matches, CsvStore, MatchStore};

#[derive(Parser)]
#[command(name = "match-stats")]
#[command(about = "Gaming match statistics dashboard backend")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV file holding match records
    #[arg(long, env = "DATA_FILE", global = true)]
    data_file: Option<PathBuf>,

    /// Where match records come from
    #[arg(long, env = "DATA_SOURCE", value_enum, global = true)]
    source: Option<DataSource>,

    /// Host to bind to
    #[arg(long, env = "HOST", global = true)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT", global = true)]
    port: Option<u16>,

    /// Directory of front-end assets
    #[arg(long, env = "STATIC_DIR", global = true)]
    static_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server (the default)
    Serve,

    /// Write randomly generated matches to the data file
    Seed {
        /// Number of matches to generate
        #[arg(long, default_value = "30")]
        count: usize,
    },
}

impl Cli {
    /// Defaults, then the config file, then flags and environment.
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => AppConfig::default(),
        };

        if let Some(file) = &self.data_file {
            config.data.file = file.clone();
        }
        if let Some(source) = self.source {
            config.data.source = source;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = dir.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting match-stats v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.resolve_config()?;

    match cli.command {
        None | Some(Commands::Serve) => {
            let store = config.data.open_store();
            match config.data.source {
                DataSource::Csv => tracing::info!("Serving matches from {}", store.location()),
                DataSource::Sample => tracing::info!(
                    "Serving {} generated matches per request",
                    config.data.sample_size
                ),
            }

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let state = AppState::new(store, config.server);
            let app = build_router(state);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            tracing::info!("Dashboard: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Some(Commands::Seed { count }) => {
            let store = CsvStore::new(config.data.file.clone());
            let matches = generate_matches(count, &mut rand::rng());
            store.replace(&matches)?;
            println!("Wrote {} matches to {}", matches.len(), store.location());
        }
    }

    Ok(())
}
