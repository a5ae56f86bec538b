use anyhow::Context;
use menu_backend::api;
use menu_backend::config::Settings;
use menu_backend::lifecycle::{setup_tracing, MenuSystem};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let settings = Settings::load().context("Failed to load settings")?;
    info!(?settings, "Starting menu backend");

    let system = MenuSystem::new(&settings.store);
    if settings.store.seed_demo_items {
        system
            .seed_demo_items()
            .await
            .context("Failed to seed demo items")?;
    }

    let addr = settings.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Listening");

    let app = api::router(system.menu_service.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
