//! Users API server: opens the SQLite store, ensures the `users` table, serves the CRUD routes.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use users_api::{app, AppState, ServerConfig, UserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("users_api=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = UserStore::bootstrap(&config.store).await?;
    let state = AppState::new(store.clone());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
