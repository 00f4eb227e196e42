pub mod album;
mod error;
pub mod id;
pub mod photo;

use crate::{
    album::Album,
    id::{AlbumId, UserId},
    photo::Photo,
};
pub use error::TypicodeError;
pub use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

/// Source of album and photo collections.
///
/// `Ok(None)` means the upstream reported no data for the resource, which is
/// distinct from an empty collection.
pub trait ResourceClient: Send + Sync {
    fn get_albums(
        &self,
    ) -> impl Future<Output = Result<Option<Vec<Album>>, TypicodeError>> + Send;

    fn get_albums_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<Vec<Album>>, TypicodeError>> + Send;

    fn get_photos(
        &self,
    ) -> impl Future<Output = Result<Option<Vec<Photo>>, TypicodeError>> + Send;

    fn get_photos_by_album(
        &self,
        album_id: AlbumId,
    ) -> impl Future<Output = Result<Option<Vec<Photo>>, TypicodeError>> + Send;
}

/// JSON-over-HTTP client for the typicode API.
///
/// Holds a single `reqwest::Client`, so build it once and share it.
#[derive(Debug, Clone)]
pub struct Typicode {
    client: reqwest::Client,
    base_url: Url,
}

impl Typicode {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, mut base_url: Url) -> Self {
        // resource paths are joined relative to the base, which needs a trailing slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        tracing::debug!(%base_url, "initialised typicode client");
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch<T>(&self, path: &str) -> Result<Option<T>, TypicodeError>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "calling typicode api");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TypicodeError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(None);
        }

        Ok(serde_json::from_slice::<Option<T>>(&body)?)
    }
}

impl ResourceClient for Typicode {
    async fn get_albums(&self) -> Result<Option<Vec<Album>>, TypicodeError> {
        self.fetch("albums").await
    }

    async fn get_albums_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Vec<Album>>, TypicodeError> {
        self.fetch(&format!("albums/userId={user_id}")).await
    }

    async fn get_photos(&self) -> Result<Option<Vec<Photo>>, TypicodeError> {
        self.fetch("photos").await
    }

    async fn get_photos_by_album(
        &self,
        album_id: AlbumId,
    ) -> Result<Option<Vec<Photo>>, TypicodeError> {
        self.fetch(&format!("photos/albumId={album_id}")).await
    }
}
