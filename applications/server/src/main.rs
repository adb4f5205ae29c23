/// Storybook Server - static asset server for the storybook web page
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use storybook_server::{config::ServerConfig, create_router, services::AssetStore, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "storybook-server")]
#[command(about = "Storybook static asset server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storybook_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    config.validate()?;

    tracing::info!("Starting Storybook Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Asset directory: {:?}", config.assets.directory);

    // Initialize asset store
    let assets = AssetStore::new(config.assets.directory.clone());
    assets.initialize().await?;
    let assets = Arc::new(assets);
    tracing::info!("Asset store initialized");

    // Build application state
    let app_state = AppState::new(assets);

    // Build router
    let app = create_router(app_state, config.assets.web_directory.clone());

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
