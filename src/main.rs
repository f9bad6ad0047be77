use clap::Parser;
use quotes_service::config::ServerConfig;
use quotes_service::quotes::handlers::router;
use quotes_service::quotes::service::QuotesService;
use quotes_service::storage::memory::MemoryQuotesStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // 1. Storage layer:
    let store = Arc::new(MemoryQuotesStore::new());
    tracing::info!("Quote store ready ({} quotes)", store.len());

    // 2. Service layer:
    let service = QuotesService::new(store.clone());

    // 3. HTTP Router:
    let app = router(service);

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
