//! Combines albums with their photos and classifies the outcome.

use futures::{StreamExt, TryStreamExt, stream};
use std::{collections::HashMap, num::NonZeroUsize};
use thiserror::Error;
use typicode::{
    ResourceClient, TypicodeError,
    album::Album,
    id::{AlbumId, UserId},
    photo::Photo,
};

pub const INVALID_USER_ID: &str = "Value for parameter userId must be greater than 0";

const FETCH_ALL_FAILED: &str = "error occurred retrieving albums and photos";

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("no matching albums found")]
    NotFound,

    /// Display carries only `context`; the upstream detail stays in `source`.
    #[error("{context}")]
    Upstream {
        context: String,
        #[source]
        source: TypicodeError,
    },
}

impl AggregateError {
    fn upstream(context: impl Into<String>, source: TypicodeError) -> Self {
        let context = context.into();
        tracing::error!(error = %source, "{context}");
        Self::Upstream { context, source }
    }
}

pub struct Aggregator<C> {
    client: C,
    photo_concurrency: NonZeroUsize,
}

impl<C: ResourceClient> Aggregator<C> {
    pub fn new(client: C, photo_concurrency: NonZeroUsize) -> Self {
        Self {
            client,
            photo_concurrency,
        }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Every album, each carrying the photos that belong to it.
    ///
    /// If the photo source has no data the albums are returned with `photos`
    /// left unset rather than empty.
    pub async fn fetch_all(&self) -> Result<Vec<Album>, AggregateError> {
        tracing::debug!("retrieving all albums and photos");

        let albums = self
            .client
            .get_albums()
            .await
            .map_err(|e| AggregateError::upstream(FETCH_ALL_FAILED, e))?;

        let Some(mut albums) = albums else {
            tracing::warn!("album source returned no data");
            return Err(AggregateError::NotFound);
        };

        let photos = self
            .client
            .get_photos()
            .await
            .map_err(|e| AggregateError::upstream(FETCH_ALL_FAILED, e))?;

        match photos {
            Some(photos) => combine(&mut albums, photos),
            None => tracing::debug!("photo source returned no data, leaving photos unset"),
        }

        tracing::debug!(albums = albums.len(), "retrieved all albums and photos");
        Ok(albums)
    }

    /// Albums owned by `user_id`, with photos fetched album by album.
    ///
    /// Up to `photo_concurrency` photo requests run at once; album order is
    /// kept and the first failure aborts the whole fetch.
    pub async fn fetch_by_user(
        &self,
        user_id: impl Into<UserId>,
    ) -> Result<Vec<Album>, AggregateError> {
        let user_id = user_id.into();
        if user_id.get() <= 0 {
            tracing::debug!(%user_id, "rejecting invalid user id");
            return Err(AggregateError::InvalidArgument(INVALID_USER_ID));
        }

        let context =
            || format!("error occurred trying to retrieve albums and photos for user id {user_id}");

        tracing::debug!(%user_id, "retrieving albums and photos for user");

        let albums = match self.client.get_albums_by_user(user_id).await {
            Ok(Some(albums)) => albums,
            Ok(None) => {
                tracing::warn!(%user_id, "album source returned no data for user");
                return Err(AggregateError::NotFound);
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(%user_id, "no albums found for user");
                return Err(AggregateError::NotFound);
            }
            Err(e) => return Err(AggregateError::upstream(context(), e)),
        };

        let albums: Vec<Album> = stream::iter(albums)
            .map(|album| self.with_photos(album))
            .buffered(self.photo_concurrency.get())
            .try_collect()
            .await
            .map_err(|e| AggregateError::upstream(context(), e))?;

        tracing::debug!(%user_id, albums = albums.len(), "retrieved albums and photos for user");
        Ok(albums)
    }

    async fn with_photos(&self, mut album: Album) -> Result<Album, TypicodeError> {
        album.photos = self.client.get_photos_by_album(album.id).await?;
        Ok(album)
    }
}

/// Gives every album the photos whose album id matches its own, in their
/// original order. Albums without any matching photo get an empty list.
fn combine(albums: &mut [Album], photos: Vec<Photo>) {
    let mut by_album: HashMap<AlbumId, Vec<Photo>> = HashMap::new();
    for photo in photos {
        by_album.entry(photo.album_id).or_default().push(photo);
    }

    for album in albums {
        album.photos = Some(by_album.get(&album.id).cloned().unwrap_or_default());
    }
}
