use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use super::ApiError;
use crate::state::{new_id, AppState, Customer, Movie, Rental, RentalMovie, StoreData};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RentalBody {
    customer_id: String,
    movie_id: String,
}

/// Look up both sides of a rental.
fn resolve(inner: &StoreData, body: &RentalBody) -> Result<(Customer, Movie), ApiError> {
    let customer = inner
        .customers
        .get(&body.customer_id)
        .cloned()
        .ok_or_else(|| ApiError::bad_request("Invalid customer."))?;
    let movie = inner
        .movies
        .get(&body.movie_id)
        .cloned()
        .ok_or_else(|| ApiError::bad_request("Invalid movie."))?;
    Ok((customer, movie))
}

pub async fn list_rentals(State(state): State<AppState>) -> Json<Vec<Rental>> {
    let inner = state.inner.read().await;
    let mut rentals: Vec<Rental> = inner.rentals.values().cloned().collect();
    rentals.sort_by(|a, b| b.date_out.cmp(&a.date_out));
    Json(rentals)
}

pub async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Rental>, ApiError> {
    let inner = state.inner.read().await;
    inner
        .rentals
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("rental"))
}

pub async fn create_rental(
    State(state): State<AppState>,
    Json(body): Json<RentalBody>,
) -> Result<Json<Rental>, ApiError> {
    let mut inner = state.inner.write().await;
    let (customer, movie) = resolve(&inner, &body)?;

    if movie.number_in_stock == 0 {
        return Err(ApiError::bad_request("Movie not in stock."));
    }

    let rental = Rental {
        id: new_id(),
        customer,
        movie: RentalMovie::from(&movie),
        date_out: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    if let Some(stocked) = inner.movies.get_mut(&movie.id) {
        stocked.number_in_stock -= 1;
    }
    inner.rentals.insert(rental.id.clone(), rental.clone());
    Ok(Json(rental))
}

pub async fn update_rental(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RentalBody>,
) -> Result<Json<Rental>, ApiError> {
    let mut inner = state.inner.write().await;
    let (customer, movie) = resolve(&inner, &body)?;

    let rental = inner
        .rentals
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found("rental"))?;
    rental.customer = customer;
    rental.movie = RentalMovie::from(&movie);
    Ok(Json(rental.clone()))
}

pub async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Rental>, ApiError> {
    let mut inner = state.inner.write().await;
    inner
        .rentals
        .remove(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("rental"))
}
