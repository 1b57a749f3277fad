use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub is_gold: bool,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalMovie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub daily_rental_rate: f64,
}

impl From<&Movie> for RentalMovie {
    fn from(movie: &Movie) -> Self {
        RentalMovie {
            id: movie.id.clone(),
            title: movie.title.clone(),
            daily_rental_rate: movie.daily_rental_rate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer: Customer,
    pub movie: RentalMovie,
    pub date_out: String,
}

#[derive(Debug, Default)]
pub struct StoreData {
    pub genres: HashMap<String, Genre>,
    pub customers: HashMap<String, Customer>,
    pub movies: HashMap<String, Movie>,
    pub rentals: HashMap<String, Rental>,
}

#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<StoreData>>,
    token: Arc<str>,
    requests: Arc<AtomicUsize>,
}

/// 24 hex characters, shaped like the store's object ids.
pub fn new_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(24);
    id
}

impl AppState {
    pub fn new(token: &str) -> Self {
        AppState {
            inner: Arc::new(RwLock::new(StoreData::default())),
            token: Arc::from(token),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Number of requests received, including rejected ones.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub(crate) fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn insert_genre(&self, name: &str) -> Genre {
        let genre = Genre {
            id: new_id(),
            name: name.to_string(),
        };
        let mut inner = self.inner.write().await;
        inner.genres.insert(genre.id.clone(), genre.clone());
        genre
    }

    pub async fn insert_customer(&self, name: &str, phone: &str, is_gold: bool) -> Customer {
        let customer = Customer {
            id: new_id(),
            name: name.to_string(),
            is_gold,
            phone: phone.to_string(),
        };
        let mut inner = self.inner.write().await;
        inner.customers.insert(customer.id.clone(), customer.clone());
        customer
    }

    /// Insert a movie of an existing genre. Returns `None` if the genre is unknown.
    pub async fn insert_movie(
        &self,
        title: &str,
        genre_id: &str,
        number_in_stock: u32,
        daily_rental_rate: f64,
    ) -> Option<Movie> {
        let mut inner = self.inner.write().await;
        let genre = inner.genres.get(genre_id)?.clone();
        let movie = Movie {
            id: new_id(),
            title: title.to_string(),
            genre,
            number_in_stock,
            daily_rental_rate,
        };
        inner.movies.insert(movie.id.clone(), movie.clone());
        Some(movie)
    }
}
