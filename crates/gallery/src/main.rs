mod aggregator;
mod config;
mod server;
#[cfg(test)]
mod testing;
mod view;

use typicode::Typicode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or("typicode=debug,gallery=debug,tower_http=debug".into()),
        )
        .init();

    let config = config::load()?;
    tracing::info!(base_url = %config.api.base_url, "configuration loaded");

    let client = Typicode::new(config.api.base_url.clone());

    server::start(client, config).await?;

    Ok(())
}
