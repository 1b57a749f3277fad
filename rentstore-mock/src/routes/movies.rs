use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::{check_length, check_range, ApiError};
use crate::state::{new_id, AppState, Movie};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MovieBody {
    title: String,
    genre_id: String,
    number_in_stock: u32,
    daily_rental_rate: f64,
}

impl MovieBody {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("title", &self.title, 5, 50)?;
        check_range("numberInStock", f64::from(self.number_in_stock), 255.0)?;
        check_range("dailyRentalRate", self.daily_rental_rate, 255.0)
    }
}

pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let inner = state.inner.read().await;
    let mut movies: Vec<Movie> = inner.movies.values().cloned().collect();
    movies.sort_by(|a, b| a.title.cmp(&b.title));
    Json(movies)
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let inner = state.inner.read().await;
    inner
        .movies
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("movie"))
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<MovieBody>,
) -> Result<Json<Movie>, ApiError> {
    body.validate()?;
    let mut inner = state.inner.write().await;

    let genre = inner
        .genres
        .get(&body.genre_id)
        .cloned()
        .ok_or_else(|| ApiError::bad_request("Invalid genre."))?;

    let movie = Movie {
        id: new_id(),
        title: body.title,
        genre,
        number_in_stock: body.number_in_stock,
        daily_rental_rate: body.daily_rental_rate,
    };
    inner.movies.insert(movie.id.clone(), movie.clone());
    Ok(Json(movie))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<MovieBody>,
) -> Result<Json<Movie>, ApiError> {
    body.validate()?;
    let mut inner = state.inner.write().await;

    let genre = inner
        .genres
        .get(&body.genre_id)
        .cloned()
        .ok_or_else(|| ApiError::bad_request("Invalid genre."))?;

    let movie = inner
        .movies
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found("movie"))?;
    movie.title = body.title;
    movie.genre = genre;
    movie.number_in_stock = body.number_in_stock;
    movie.daily_rental_rate = body.daily_rental_rate;
    Ok(Json(movie.clone()))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let mut inner = state.inner.write().await;
    inner
        .movies
        .remove(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("movie"))
}
