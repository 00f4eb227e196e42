//! In-memory `ResourceClient` used by the aggregator and router tests.

use std::{collections::HashMap, sync::Mutex};
use typicode::{
    ResourceClient, StatusCode, TypicodeError,
    album::Album,
    id::{AlbumId, PhotoId, UserId},
    photo::Photo,
};

/// What a stubbed endpoint answers with.
#[derive(Debug, Clone, Default)]
pub enum Reply<T> {
    Data(T),
    #[default]
    NoData,
    NotFound,
    Fail,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> Result<Option<T>, TypicodeError> {
        match self {
            Self::Data(data) => Ok(Some(data.clone())),
            Self::NoData => Ok(None),
            Self::NotFound => Err(TypicodeError::Status {
                status: StatusCode::NOT_FOUND,
                body: "{}".into(),
            }),
            Self::Fail => Err(TypicodeError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Albums,
    AlbumsByUser(UserId),
    Photos,
    PhotosByAlbum(AlbumId),
}

/// Albums absent from `photos_by_album` answer with an empty photo list.
#[derive(Debug, Default)]
pub struct StubClient {
    pub albums: Reply<Vec<Album>>,
    pub albums_by_user: Reply<Vec<Album>>,
    pub photos: Reply<Vec<Photo>>,
    pub photos_by_album: HashMap<AlbumId, Reply<Vec<Photo>>>,
    pub calls: Mutex<Vec<Call>>,
}

impl StubClient {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ResourceClient for StubClient {
    async fn get_albums(&self) -> Result<Option<Vec<Album>>, TypicodeError> {
        self.record(Call::Albums);
        self.albums.resolve()
    }

    async fn get_albums_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Vec<Album>>, TypicodeError> {
        self.record(Call::AlbumsByUser(user_id));
        self.albums_by_user.resolve()
    }

    async fn get_photos(&self) -> Result<Option<Vec<Photo>>, TypicodeError> {
        self.record(Call::Photos);
        self.photos.resolve()
    }

    async fn get_photos_by_album(
        &self,
        album_id: AlbumId,
    ) -> Result<Option<Vec<Photo>>, TypicodeError> {
        self.record(Call::PhotosByAlbum(album_id));
        match self.photos_by_album.get(&album_id) {
            Some(reply) => reply.resolve(),
            None => Ok(Some(Vec::new())),
        }
    }
}

pub fn album(id: i64, user_id: i64) -> Album {
    Album {
        id: AlbumId::from(id),
        title: format!("Album{id}"),
        user_id: UserId::from(user_id),
        photos: None,
    }
}

pub fn photo(id: i64, album_id: i64) -> Photo {
    Photo {
        id: PhotoId::from(id),
        album_id: AlbumId::from(album_id),
        title: format!("Photo{id}"),
        url: format!("http://photo{id}"),
        thumbnail_url: format!("http://thumb{id}"),
    }
}

pub fn sample_albums() -> Vec<Album> {
    vec![album(1, 1), album(2, 2)]
}

pub fn sample_photos() -> Vec<Photo> {
    vec![
        photo(1, 1),
        photo(2, 1),
        photo(3, 2),
        photo(4, 2),
        photo(5, 2),
    ]
}
