mod albums;
mod error;

use std::sync::Arc;

use crate::{aggregator::Aggregator, config::Config};
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use typicode::{ResourceClient, Typicode};

pub fn router<C>(aggregator: Arc<Aggregator<C>>) -> Router
where
    C: ResourceClient + 'static,
{
    Router::new()
        .route("/albums", get(albums::list_albums::<C>))
        .layer(TraceLayer::new_for_http())
        .with_state(aggregator)
}

pub async fn start(client: Typicode, config: Config) -> anyhow::Result<()> {
    let aggregator = Arc::new(Aggregator::new(client, config.aggregator.photo_concurrency));

    let listener = TcpListener::bind(config.server.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving albums");

    axum::serve(listener, router(aggregator))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
