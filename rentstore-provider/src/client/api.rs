//! Wire types for the store API.
//!
//! Objects returned by the store carry their identifier in `_id`. Requests
//! never carry an identifier; the store assigns it on creation and takes it
//! from the path on update.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A resource collection served under `api/<collection>`.
pub trait ApiResource: DeserializeOwned + Send + Sync {
    /// Path of the collection, relative to the base URL.
    const COLLECTION: &'static str;
    /// Singular name used in logs and errors.
    const NAME: &'static str;

    /// Body accepted by POST and PUT.
    type Request: Serialize + Send + Sync;

    /// Server-assigned identifier.
    fn id(&self) -> &str;

    /// Request body that recreates this object's settable state.
    fn to_request(&self) -> Self::Request;
}

// =============================================================================
// Genres
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRequest {
    pub name: String,
}

impl ApiResource for Genre {
    const COLLECTION: &'static str = "api/genres";
    const NAME: &'static str = "genre";
    type Request = GenreRequest;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_request(&self) -> GenreRequest {
        GenreRequest {
            name: self.name.clone(),
        }
    }
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_gold: bool,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub name: String,
    pub is_gold: bool,
    pub phone: String,
}

impl ApiResource for Customer {
    const COLLECTION: &'static str = "api/customers";
    const NAME: &'static str = "customer";
    type Request = CustomerRequest;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_request(&self) -> CustomerRequest {
        CustomerRequest {
            name: self.name.clone(),
            is_gold: self.is_gold,
            phone: self.phone.clone(),
        }
    }
}

// =============================================================================
// Movies
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,
}

/// Movie create/update body. The genre is sent by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    pub title: String,
    pub genre_id: String,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,
}

impl ApiResource for Movie {
    const COLLECTION: &'static str = "api/movies";
    const NAME: &'static str = "movie";
    type Request = MovieRequest;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_request(&self) -> MovieRequest {
        MovieRequest {
            title: self.title.clone(),
            genre_id: self.genre.id.clone(),
            number_in_stock: self.number_in_stock,
            daily_rental_rate: self.daily_rental_rate,
        }
    }
}

// =============================================================================
// Rentals
// =============================================================================

/// Movie as embedded in a rental at checkout time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSnapshot {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub daily_rental_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer: Customer,
    pub movie: MovieSnapshot,
    pub date_out: String,
}

/// Composite key a rental is created from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub customer_id: String,
    pub movie_id: String,
}

impl ApiResource for Rental {
    const COLLECTION: &'static str = "api/rentals";
    const NAME: &'static str = "rental";
    type Request = RentalRequest;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_request(&self) -> RentalRequest {
        RentalRequest {
            customer_id: self.customer.id.clone(),
            movie_id: self.movie.id.clone(),
        }
    }
}
