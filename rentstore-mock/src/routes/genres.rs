use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::{check_length, ApiError};
use crate::state::{new_id, AppState, Genre};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreBody {
    name: String,
}

impl GenreBody {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 5, 50)
    }
}

pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<Genre>> {
    let inner = state.inner.read().await;
    let mut genres: Vec<Genre> = inner.genres.values().cloned().collect();
    genres.sort_by(|a, b| a.name.cmp(&b.name));
    Json(genres)
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Genre>, ApiError> {
    let inner = state.inner.read().await;
    inner
        .genres
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("genre"))
}

pub async fn create_genre(
    State(state): State<AppState>,
    Json(body): Json<GenreBody>,
) -> Result<Json<Genre>, ApiError> {
    body.validate()?;
    let mut inner = state.inner.write().await;

    if inner.genres.values().any(|g| g.name == body.name) {
        return Err(ApiError::bad_request("Genre already exists."));
    }

    let genre = Genre {
        id: new_id(),
        name: body.name,
    };
    inner.genres.insert(genre.id.clone(), genre.clone());
    Ok(Json(genre))
}

pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<GenreBody>,
) -> Result<Json<Genre>, ApiError> {
    body.validate()?;
    let mut inner = state.inner.write().await;

    let genre = inner
        .genres
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found("genre"))?;
    genre.name = body.name;
    Ok(Json(genre.clone()))
}

pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Genre>, ApiError> {
    let mut inner = state.inner.write().await;
    inner
        .genres
        .remove(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("genre"))
}
