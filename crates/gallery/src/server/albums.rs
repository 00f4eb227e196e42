use super::error::ApiErrorResponse;
use crate::{aggregator::Aggregator, view::AlbumView};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use std::sync::Arc;
use typicode::{ResourceClient, id::UserId};

pub const MALFORMED_USER_ID: &str = "Value for parameter userId must be a valid integer";

#[derive(Debug, Deserialize)]
pub struct AlbumsQuery {
    #[serde(rename = "userId", alias = "userid")]
    pub user_id: Option<i64>,
}

/// `GET /albums` and `GET /albums?userId={n}`
pub async fn list_albums<C: ResourceClient>(
    State(aggregator): State<Arc<Aggregator<C>>>,
    query: Result<Query<AlbumsQuery>, QueryRejection>,
) -> Result<Json<Vec<AlbumView>>, ApiErrorResponse> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "rejecting malformed albums query");
        ApiErrorResponse::bad_request(MALFORMED_USER_ID)
    })?;

    tracing::debug!(user_id = ?query.user_id, "albums endpoint called");

    let albums = match query.user_id {
        Some(user_id) => aggregator.fetch_by_user(UserId::from(user_id)).await?,
        None => aggregator.fetch_all().await?,
    };

    tracing::debug!(albums = albums.len(), "returning albums");
    Ok(Json(albums.into_iter().map(AlbumView::from).collect()))
}
