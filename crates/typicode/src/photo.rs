use crate::id::{AlbumId, PhotoId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,
    pub album_id: AlbumId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}
