//! Products API server.
//!
//! Reads configuration from the environment (and `.env` when present), prepares
//! the `products` table, then serves the API until Ctrl+C or SIGTERM.

use products_api::{
    build_app, ensure_database_exists, ensure_products_table, AppState, PostgresProductRepository,
    ProductServiceImpl, ServerConfig, API_PREFIX,
};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("products_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_products_table(&pool).await?;

    let repository = PostgresProductRepository::new(pool);
    let state = AppState::new(ProductServiceImpl::new(repository));
    let app = build_app(state, &config);

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        "listening on {} (api at {}, docs at http://{}:{}/swagger)",
        listener.local_addr()?,
        API_PREFIX,
        config.host,
        config.port
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
