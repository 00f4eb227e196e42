use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use std::{
    net::{Ipv4Addr, SocketAddr},
    num::NonZeroUsize,
    path::PathBuf,
};
use url::Url;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub aggregator: AggregatorConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: Url,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AggregatorConfig {
    /// How many per-album photo requests may be in flight at once.
    #[serde(default = "default_photo_concurrency")]
    pub photo_concurrency: NonZeroUsize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            photo_concurrency: default_photo_concurrency(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 8080))
}

fn default_photo_concurrency() -> NonZeroUsize {
    NonZeroUsize::MIN
}

pub fn load() -> anyhow::Result<Config> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("failed to get config directory"))?
        .join("gallery")
        .join("config.toml");

    Ok(figment(config_dir).extract()?)
}

fn figment(user_config: PathBuf) -> Figment {
    Figment::new()
        .merge(Toml::file("config.toml"))
        .merge(Toml::file(user_config))
        .merge(Env::prefixed("GALLERY_").split("__"))
}
