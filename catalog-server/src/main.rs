use anyhow::Context;
use catalog_server::{args::Args, config::ServerConfig, router, AppState};
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("=== Service Catalog Starting ===");

    let args = Args::parse();

    // 1. Load and validate configuration
    let mut config = ServerConfig::load(&args.config)
        .with_context(|| format!("Failed to load configuration from {:?}", args.config))?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    // 2. Build registry and version store
    let state = AppState::from_config(&config)?;

    // 3. Setup Routes
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Service Catalog listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
