//! Response shapes returned to HTTP clients.

use serde::Serialize;
use typicode::{
    album::Album,
    id::{AlbumId, PhotoId, UserId},
    photo::Photo,
};

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumView {
    pub id: AlbumId,
    pub title: String,
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<PhotoView>>,
}

/// A photo without the id of the album it belongs to.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoView {
    pub id: PhotoId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl From<Album> for AlbumView {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            title: album.title,
            user_id: album.user_id,
            photos: album
                .photos
                .map(|photos| photos.into_iter().map(PhotoView::from).collect()),
        }
    }
}

impl From<Photo> for PhotoView {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            title: photo.title,
            url: photo.url,
            thumbnail_url: photo.thumbnail_url,
        }
    }
}
